use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use spoytcli::sync::{
    CatalogError, DeleteOutcome, DestinationCatalog, LookupError, RetryPolicy, SyncContext,
    WriteError, matcher, synchronizer,
};
use spoytcli::types::{SourcePlaylist, Track};
use tokio::time::Instant;

// Stub destination backend with call recording. Add outcomes are scripted
// up front; anything beyond the script succeeds.
#[derive(Default)]
struct StubDestination {
    playlists: HashMap<String, String>,
    search_results: HashMap<String, Option<String>>,
    failing_searches: u32,
    add_script: VecDeque<Result<(), WriteError>>,
    list_calls: u32,
    create_calls: u32,
    delete_calls: Vec<String>,
    search_calls: Vec<String>,
    add_attempts: Vec<(String, String, Instant)>,
    next_playlist_id: u32,
}

impl DestinationCatalog for StubDestination {
    async fn list_playlists(&mut self) -> Result<HashMap<String, String>, CatalogError> {
        self.list_calls += 1;
        Ok(self.playlists.clone())
    }

    async fn create_playlist(
        &mut self,
        name: &str,
        _description: &str,
        _tags: &[String],
        _public: bool,
    ) -> Result<String, CatalogError> {
        self.create_calls += 1;
        self.next_playlist_id += 1;
        let id = format!("yt-playlist-{}", self.next_playlist_id);
        self.playlists.insert(name.to_string(), id.clone());
        Ok(id)
    }

    async fn delete_playlist(&mut self, playlist_id: &str) -> Result<(), CatalogError> {
        self.delete_calls.push(playlist_id.to_string());
        Ok(())
    }

    async fn search_top_result(&mut self, query: &str) -> Result<Option<String>, LookupError> {
        self.search_calls.push(query.to_string());
        if self.failing_searches > 0 {
            self.failing_searches -= 1;
            return Err(LookupError::Api("search backend unavailable".to_string()));
        }
        Ok(self.search_results.get(query).cloned().unwrap_or(None))
    }

    async fn add_item(&mut self, playlist_id: &str, item_id: &str) -> Result<(), WriteError> {
        self.add_attempts
            .push((playlist_id.to_string(), item_id.to_string(), Instant::now()));
        self.add_script.pop_front().unwrap_or(Ok(()))
    }
}

fn track(name: &str, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        artists: vec![artist.to_string()],
        duration_ms: Some(180_000),
    }
}

fn playlist(name: &str, tracks: Vec<Track>) -> SourcePlaylist {
    SourcePlaylist {
        name: name.to_string(),
        tracks,
    }
}

#[tokio::test(start_paused = true)]
async fn matcher_caches_lookups_per_normalized_key() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));

    let first = matcher::find_best_match(&mut ctx, &mut stub, &track("Song A", "Artist X"))
        .await
        .unwrap();
    assert_eq!(first, Some("v1".to_string()));

    // Same track again: cache hit, no second search
    let second = matcher::find_best_match(&mut ctx, &mut stub, &track("Song A", "Artist X"))
        .await
        .unwrap();
    assert_eq!(second, Some("v1".to_string()));
    assert_eq!(stub.search_calls.len(), 1);

    // Key normalization: case and whitespace differences still hit the cache
    let variant = Track {
        name: "  song   A ".to_string(),
        artists: vec!["ARTIST X".to_string()],
        duration_ms: None,
    };
    let third = matcher::find_best_match(&mut ctx, &mut stub, &variant)
        .await
        .unwrap();
    assert_eq!(third, Some("v1".to_string()));
    assert_eq!(stub.search_calls.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn matcher_caches_misses() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();

    let miss = matcher::find_best_match(&mut ctx, &mut stub, &track("Unknown Song", "Nobody"))
        .await
        .unwrap();
    assert_eq!(miss, None);

    let miss_again = matcher::find_best_match(&mut ctx, &mut stub, &track("Unknown Song", "Nobody"))
        .await
        .unwrap();
    assert_eq!(miss_again, None);
    assert_eq!(stub.search_calls.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn sync_reuses_existing_destination_playlist() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.playlists
        .insert("Road Trip".to_string(), "p1".to_string());
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));

    let source = playlist("Road Trip", vec![track("Song A", "Artist X")]);
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(stub.create_calls, 0);
    assert_eq!(stub.add_attempts[0].0, "p1");

    // Second pass in the same run: still no create, index already loaded
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();
    assert_eq!(report.added, 1);
    assert_eq!(stub.create_calls, 0);
    assert_eq!(stub.list_calls, 1);
}

#[tokio::test(start_paused = true)]
async fn add_retries_conflicts_with_doubling_backoff() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));
    stub.add_script = VecDeque::from(vec![
        Err(WriteError::Conflict),
        Err(WriteError::Conflict),
        Ok(()),
    ]);

    let source = playlist("Road Trip", vec![track("Song A", "Artist X")]);
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(stub.add_attempts.len(), 3);

    // Delays between attempts double: 1s then 2s
    let gap1 = stub.add_attempts[1].2 - stub.add_attempts[0].2;
    let gap2 = stub.add_attempts[2].2 - stub.add_attempts[1].2;
    assert_eq!(gap1, Duration::from_secs(1));
    assert_eq!(gap2, Duration::from_secs(2));
    assert!(gap2 > gap1);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_fail_the_track_not_the_playlist() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));
    stub.search_results
        .insert("Song B Artist Y".to_string(), Some("v2".to_string()));
    stub.add_script = VecDeque::from(vec![
        Err(WriteError::Conflict),
        Err(WriteError::Conflict),
        Err(WriteError::Conflict),
        Err(WriteError::Conflict),
        Err(WriteError::Conflict),
    ]);

    let source = playlist(
        "Road Trip",
        vec![track("Song A", "Artist X"), track("Song B", "Artist Y")],
    );
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.added, 1);

    // 5 attempts for the first track, 1 for the second
    assert_eq!(stub.add_attempts.len(), 6);
    assert_eq!(stub.add_attempts[5].1, "v2");
}

#[tokio::test(start_paused = true)]
async fn non_retryable_write_error_aborts_immediately() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));
    stub.search_results
        .insert("Song B Artist Y".to_string(), Some("v2".to_string()));
    stub.add_script = VecDeque::from(vec![Err(WriteError::Other(
        "invalid request".to_string(),
    ))]);

    let source = playlist(
        "Road Trip",
        vec![track("Song A", "Artist X"), track("Song B", "Artist Y")],
    );
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.added, 1);
    // single attempt for the failed track, no backoff retries
    assert_eq!(stub.add_attempts.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn unmatched_track_is_skipped_without_add() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();

    let source = playlist(
        "Road Trip",
        vec![track("Unknown Song", "Unknown Artist")],
    );
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.skipped_no_match, 1);
    assert_eq!(report.added, 0);
    assert!(stub.add_attempts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_search_skips_track_and_continues() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.failing_searches = 1;
    stub.search_results
        .insert("Song B Artist Y".to_string(), Some("v2".to_string()));

    let source = playlist(
        "Road Trip",
        vec![track("Song A", "Artist X"), track("Song B", "Artist Y")],
    );
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.skipped_no_match, 1);
    assert_eq!(report.added, 1);
    assert_eq!(stub.add_attempts.len(), 1);
    assert_eq!(stub.add_attempts[0].1, "v2");
}

#[tokio::test(start_paused = true)]
async fn road_trip_end_to_end() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));
    stub.search_results
        .insert("Song B Artist Y".to_string(), Some("v2".to_string()));

    let source = playlist(
        "Road Trip",
        vec![track("Song A", "Artist X"), track("Song B", "Artist Y")],
    );
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.skipped_no_match, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(stub.create_calls, 1);

    // Destination order mirrors source order
    let added: Vec<&str> = stub.add_attempts.iter().map(|(_, v, _)| v.as_str()).collect();
    assert_eq!(added, vec!["v1", "v2"]);

    // The new playlist is now resolvable from the index
    assert!(ctx.indexed_playlist("Road Trip").is_some());
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_before_next_track() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.search_results
        .insert("Song A Artist X".to_string(), Some("v1".to_string()));

    ctx.cancel_handle()
        .store(true, std::sync::atomic::Ordering::SeqCst);

    let source = playlist("Road Trip", vec![track("Song A", "Artist X")]);
    let report = synchronizer::sync_playlist(&mut ctx, &mut stub, &source, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(report.total(), 0);
    assert!(stub.search_calls.is_empty());
    assert!(stub.add_attempts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn delete_resolves_by_name_and_reports_missing() {
    let mut ctx = SyncContext::new();
    let mut stub = StubDestination::default();
    stub.playlists
        .insert("Old Mix".to_string(), "p9".to_string());

    let outcome = synchronizer::delete_playlist(&mut ctx, &mut stub, "Old Mix")
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(stub.delete_calls, vec!["p9".to_string()]);

    let outcome = synchronizer::delete_playlist(&mut ctx, &mut stub, "Nonexistent")
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(stub.delete_calls.len(), 1);

    // One list call serves the whole run
    assert_eq!(stub.list_calls, 1);
}
