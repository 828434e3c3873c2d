use std::time::Duration;

use tokio::time::sleep;

use crate::{
    info,
    sync::{CatalogError, DestinationCatalog, RetryPolicy, SyncContext, matcher},
    types::SourcePlaylist,
    utils, warning,
};

/// Fixed delay between successful adds. A proactive throttle against the
/// destination's write rate limits, not a correctness requirement.
pub const TRACK_PACING: Duration = Duration::from_secs(1);

pub const PLAYLIST_DESCRIPTION: &str = "Playlist created from Spotify";

pub fn playlist_tags() -> Vec<String> {
    vec!["spotify".to_string(), "youtube".to_string()]
}

/// Per-track outcome of one synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    Added,
    SkippedNoMatch,
    FailedAfterRetries,
}

/// Per-playlist aggregation of track outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: u32,
    pub skipped_no_match: u32,
    pub failed: u32,
}

impl SyncReport {
    fn record(&mut self, outcome: TrackOutcome) {
        match outcome {
            TrackOutcome::Added => self.added += 1,
            TrackOutcome::SkippedNoMatch => self.skipped_no_match += 1,
            TrackOutcome::FailedAfterRetries => self.failed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.added + self.skipped_no_match + self.failed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Populates the destination playlist index on first use: one list call per
/// run, reused by every subsequent resolve and delete.
pub async fn ensure_playlist_index<D: DestinationCatalog>(
    ctx: &mut SyncContext,
    destination: &mut D,
) -> Result<(), CatalogError> {
    if !ctx.index_loaded() {
        let index = destination.list_playlists().await?;
        ctx.set_playlist_index(index);
    }
    Ok(())
}

/// Reuses the destination playlist with the exact source name when one
/// exists, otherwise creates it and records the new id in the index.
/// Re-running against an already-synced playlist never creates duplicates.
async fn resolve_destination_playlist<D: DestinationCatalog>(
    ctx: &mut SyncContext,
    destination: &mut D,
    name: &str,
) -> Result<String, CatalogError> {
    ensure_playlist_index(ctx, destination).await?;

    if let Some(id) = ctx.indexed_playlist(name) {
        info!("Reusing existing YouTube playlist '{}'", name);
        return Ok(id);
    }

    let id = destination
        .create_playlist(name, PLAYLIST_DESCRIPTION, &playlist_tags(), true)
        .await?;
    ctx.index_insert(name.to_string(), id.clone());

    Ok(id)
}

/// Synchronizes one source playlist into its destination counterpart.
///
/// Tracks are processed strictly in source order so the destination playlist
/// mirrors it. A track that finds no match is skipped without retry; a track
/// whose add keeps failing is recorded and the loop moves on. Only resolving
/// the destination playlist itself can fail the whole call.
///
/// The cancellation flag is checked at the top of the per-track loop; a
/// cancelled run returns the partial report, leaving already-added tracks in
/// place.
pub async fn sync_playlist<D: DestinationCatalog>(
    ctx: &mut SyncContext,
    destination: &mut D,
    playlist: &SourcePlaylist,
    policy: &RetryPolicy,
) -> Result<SyncReport, CatalogError> {
    let playlist_id = resolve_destination_playlist(ctx, destination, &playlist.name).await?;
    let mut report = SyncReport::default();

    for track in &playlist.tracks {
        if ctx.is_cancelled() {
            warning!(
                "Cancelled, stopping '{}' after {} of {} tracks",
                playlist.name,
                report.total(),
                playlist.tracks.len()
            );
            break;
        }

        let artists = utils::join_artists(&track.artists);

        let video_id = match matcher::find_best_match(ctx, destination, track).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                warning!("No video found for {} by {}", track.name, artists);
                report.record(TrackOutcome::SkippedNoMatch);
                continue;
            }
            Err(e) => {
                warning!("Search failed for {} by {}: {}", track.name, artists, e);
                report.record(TrackOutcome::SkippedNoMatch);
                continue;
            }
        };

        match add_with_retry(destination, &playlist_id, &video_id, policy).await {
            TrackOutcome::Added => {
                info!("Added {} by {}", track.name, artists);
                report.record(TrackOutcome::Added);
                sleep(TRACK_PACING).await;
            }
            outcome => {
                warning!("Giving up on {} by {}", track.name, artists);
                report.record(outcome);
            }
        }
    }

    Ok(report)
}

/// Attempts the add up to the policy's bound. Transient failures back off
/// with doubling delays; any other error ends the loop for this track right
/// away. Never returns an error, a failed track must not abort the playlist.
pub async fn add_with_retry<D: DestinationCatalog>(
    destination: &mut D,
    playlist_id: &str,
    item_id: &str,
    policy: &RetryPolicy,
) -> TrackOutcome {
    for attempt in 0..policy.max_attempts {
        match destination.add_item(playlist_id, item_id).await {
            Ok(()) => return TrackOutcome::Added,
            Err(err) => {
                if !policy.should_retry(&err, attempt) {
                    warning!("Adding video {} failed: {}", item_id, err);
                    return TrackOutcome::FailedAfterRetries;
                }

                let delay = policy.delay_for(attempt);
                warning!(
                    "{} while adding video {}, retrying in {}s",
                    err,
                    item_id,
                    delay.as_secs()
                );
                sleep(delay).await;
            }
        }
    }

    TrackOutcome::FailedAfterRetries
}

/// Deletes the destination playlist with the given name, if it exists.
///
/// A missing playlist is a reported no-op. The delete call itself is not
/// retried; deletion is a user-initiated, low-frequency operation and errors
/// surface directly.
pub async fn delete_playlist<D: DestinationCatalog>(
    ctx: &mut SyncContext,
    destination: &mut D,
    name: &str,
) -> Result<DeleteOutcome, CatalogError> {
    ensure_playlist_index(ctx, destination).await?;

    let Some(id) = ctx.indexed_playlist(name) else {
        return Ok(DeleteOutcome::NotFound);
    };

    destination.delete_playlist(&id).await?;
    ctx.index_remove(name);

    Ok(DeleteOutcome::Deleted)
}
