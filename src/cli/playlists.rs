use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    spotify::SpotifyCatalog,
    sync::{SourceCatalog, SyncContext, synchronizer},
    types::{PlaylistTableRow, TrackTableRow, YoutubePlaylistTableRow},
    utils,
    youtube::YoutubeCatalog,
};

pub async fn playlists(youtube: bool, tracks: Option<String>) {
    if youtube {
        list_youtube_playlists().await;
        return;
    }

    match tracks {
        Some(name) => list_tracks(name).await,
        None => list_spotify_playlists().await,
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

async fn list_spotify_playlists() {
    let mut source = match SpotifyCatalog::connect().await {
        Ok(source) => source,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching Spotify playlists...");

    let playlists = match source.list_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot list Spotify playlists: {}", e);
        }
    };

    let playlists_total = playlists.len();
    let mut rows: Vec<PlaylistTableRow> = Vec::new();

    for (count, playlist) in playlists.iter().enumerate() {
        pb.set_message(format!(
            "Counting tracks for {name} ({count}/{playlists_total})...",
            name = playlist.name,
            count = count,
            playlists_total = playlists_total
        ));

        let tracks = match source.list_tracks(&playlist.id).await {
            Ok(tracks) => tracks.len(),
            Err(_) => 0,
        };

        rows.push(PlaylistTableRow {
            name: playlist.name.clone(),
            tracks,
        });
    }

    let user_name = source
        .display_name()
        .await
        .unwrap_or_else(|_| "Unknown Name".to_string());

    pb.finish_and_clear();

    info!("Available Spotify playlists for {}:", user_name);
    println!("{}", Table::new(rows));
}

async fn list_tracks(name: String) {
    let mut source = match SpotifyCatalog::connect().await {
        Ok(source) => source,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching playlist tracks...");

    let playlists = match source.list_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot list Spotify playlists: {}", e);
        }
    };

    let Some(playlist) = playlists.into_iter().find(|p| p.name == name) else {
        pb.finish_and_clear();
        error!("No Spotify playlist named '{}'", name);
    };

    let tracks = match source.list_tracks(&playlist.id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot read tracks of '{}': {}", name, e);
        }
    };

    pb.finish_and_clear();

    // Tracks without a duration are matchable but have nothing to show in
    // the duration column; they are skipped from this listing only.
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .filter_map(|track| {
            track.duration_ms.map(|ms| TrackTableRow {
                name: track.name.clone(),
                artists: utils::join_artists(&track.artists),
                duration: utils::format_duration(ms),
            })
        })
        .collect();

    info!("Tracks in '{}':", name);
    println!("{}", Table::new(rows));
}

async fn list_youtube_playlists() {
    let mut destination = match YoutubeCatalog::connect().await {
        Ok(destination) => destination,
        Err(e) => error!("{}", e),
    };

    let mut ctx = SyncContext::new();

    let pb = spinner("Fetching YouTube playlists...");

    if let Err(e) = synchronizer::ensure_playlist_index(&mut ctx, &mut destination).await {
        pb.finish_and_clear();
        error!("Cannot list YouTube playlists: {}", e);
    }

    pb.finish_and_clear();

    let rows: Vec<YoutubePlaylistTableRow> = ctx
        .indexed_names()
        .into_iter()
        .map(|name| YoutubePlaylistTableRow { name })
        .collect();

    info!("Your YouTube playlists:");
    println!("{}", Table::new(rows));
}
