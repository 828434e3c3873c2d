use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    server, spotify,
    types::{PendingToken, PkceToken, Platform},
    youtube,
};

pub async fn auth(platforms: Vec<Platform>) {
    let spotify_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    let youtube_state: Arc<Mutex<Option<PendingToken>>> = Arc::new(Mutex::new(None));

    // one callback server serves both providers
    {
        let spotify_state = Arc::clone(&spotify_state);
        let youtube_state = Arc::clone(&youtube_state);
        tokio::spawn(async move {
            server::start_api_server(spotify_state, youtube_state).await;
        });
    }

    for platform in platforms {
        match platform {
            Platform::Spotify => spotify::auth::authorize(Arc::clone(&spotify_state)).await,
            Platform::Youtube => youtube::auth::authorize(Arc::clone(&youtube_state)).await,
        }
    }
}
