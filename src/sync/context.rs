use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// Run-scoped state for one synchronization run. Owns the video lookup cache
/// and the destination playlist index; both live for the duration of the run
/// and are discarded with it. No state is shared across runs.
pub struct SyncContext {
    video_cache: HashMap<String, Option<String>>,
    playlist_index: Option<HashMap<String, String>>,
    cancelled: Arc<AtomicBool>,
}

impl SyncContext {
    pub fn new() -> Self {
        Self {
            video_cache: HashMap::new(),
            playlist_index: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for a cancellation source (e.g. a Ctrl-C handler). The
    /// synchronizer checks the flag between tracks; tracks already added
    /// stay in place.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Cached search result for a normalized match key. The outer `Option`
    /// distinguishes "never looked up" from the inner not-found sentinel.
    pub fn cached_lookup(&self, key: &str) -> Option<Option<String>> {
        self.video_cache.get(key).cloned()
    }

    pub fn record_lookup(&mut self, key: String, result: Option<String>) {
        self.video_cache.insert(key, result);
    }

    pub fn index_loaded(&self) -> bool {
        self.playlist_index.is_some()
    }

    pub fn set_playlist_index(&mut self, index: HashMap<String, String>) {
        self.playlist_index = Some(index);
    }

    pub fn indexed_playlist(&self, name: &str) -> Option<String> {
        self.playlist_index
            .as_ref()
            .and_then(|index| index.get(name).cloned())
    }

    pub fn index_insert(&mut self, name: String, id: String) {
        if let Some(index) = &mut self.playlist_index {
            index.insert(name, id);
        }
    }

    pub fn index_remove(&mut self, name: &str) {
        if let Some(index) = &mut self.playlist_index {
            index.remove(name);
        }
    }

    /// Playlist names currently in the index, sorted for display.
    pub fn indexed_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .playlist_index
            .as_ref()
            .map(|index| index.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Default for SyncContext {
    fn default() -> Self {
        Self::new()
    }
}
