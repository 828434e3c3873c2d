use crate::{
    error, success,
    sync::{DeleteOutcome, SyncContext, synchronizer},
    warning,
    youtube::YoutubeCatalog,
};

pub async fn delete(name: String) {
    let mut destination = match YoutubeCatalog::connect().await {
        Ok(destination) => destination,
        Err(e) => error!("{}", e),
    };

    let mut ctx = SyncContext::new();

    match synchronizer::delete_playlist(&mut ctx, &mut destination, &name).await {
        Ok(DeleteOutcome::Deleted) => success!("YouTube playlist '{}' deleted.", name),
        Ok(DeleteOutcome::NotFound) => warning!("No YouTube playlist named '{}'.", name),
        Err(e) => error!("Failed to delete '{}': {}", name, e),
    }
}
