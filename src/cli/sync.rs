use std::{sync::atomic::Ordering, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    spotify::SpotifyCatalog,
    success,
    sync::{RetryPolicy, SourceCatalog, SyncContext, synchronizer},
    types::{PlaylistRef, SourcePlaylist},
    warning,
    youtube::YoutubeCatalog,
};

pub async fn sync(playlist: Option<String>, all: bool) {
    if playlist.is_none() && !all {
        error!("Nothing to sync. Pass --playlist <NAME> or --all.");
    }

    let mut source = match SpotifyCatalog::connect().await {
        Ok(source) => source,
        Err(e) => error!("{}", e),
    };
    let mut destination = match YoutubeCatalog::connect().await {
        Ok(destination) => destination,
        Err(e) => error!("{}", e),
    };

    let mut ctx = SyncContext::new();

    // abort between tracks on Ctrl-C, already-added tracks stay in place
    let cancel = ctx.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.store(true, Ordering::SeqCst);
        }
    });

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching Spotify playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    // a failed enumeration is run-fatal, nothing can be synchronized
    let playlists = match source.list_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot list Spotify playlists: {}", e);
        }
    };

    pb.finish_and_clear();

    let selected: Vec<PlaylistRef> = match &playlist {
        Some(name) => {
            let Some(found) = playlists.into_iter().find(|p| p.name == *name) else {
                error!("No Spotify playlist named '{}'", name);
            };
            vec![found]
        }
        None => playlists,
    };

    let policy = RetryPolicy::default();

    for playlist_ref in selected {
        if ctx.is_cancelled() {
            warning!("Cancelled.");
            break;
        }

        let tracks = match source.list_tracks(&playlist_ref.id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Skipping '{}': cannot read tracks: {}", playlist_ref.name, e);
                continue;
            }
        };

        let source_playlist = SourcePlaylist {
            name: playlist_ref.name,
            tracks,
        };

        info!(
            "Synchronizing '{}' ({} tracks)...",
            source_playlist.name,
            source_playlist.tracks.len()
        );

        match synchronizer::sync_playlist(&mut ctx, &mut destination, &source_playlist, &policy)
            .await
        {
            Ok(report) => {
                success!(
                    "{}: {} added, {} skipped (no match), {} failed",
                    source_playlist.name,
                    report.added,
                    report.skipped_no_match,
                    report.failed
                );
            }
            Err(e) => {
                warning!("Failed to synchronize '{}': {}", source_playlist.name, e);
            }
        }
    }
}
