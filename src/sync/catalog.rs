use std::collections::HashMap;

use crate::types::{PlaylistRef, Track};

#[derive(Debug)]
pub enum CatalogError {
    Auth(String),
    Http(reqwest::Error),
    Api(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Auth(msg) => write!(f, "authentication error: {}", msg),
            CatalogError::Http(err) => write!(f, "http error: {}", err),
            CatalogError::Api(msg) => write!(f, "api error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug)]
pub enum LookupError {
    Http(reqwest::Error),
    Api(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Http(err)
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Http(err) => write!(f, "http error: {}", err),
            LookupError::Api(msg) => write!(f, "api error: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

/// Failure classes of a destination write call. Conflict, quota and timeout
/// responses are transient and eligible for retry with backoff; anything else
/// aborts the retry loop for that track immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    Conflict,
    Quota,
    Timeout,
    Other(String),
}

impl WriteError {
    pub fn is_transient(&self) -> bool {
        !matches!(self, WriteError::Other(_))
    }
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Conflict => write!(f, "conflict response"),
            WriteError::Quota => write!(f, "quota exceeded"),
            WriteError::Timeout => write!(f, "request timed out"),
            WriteError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WriteError {}

/// Read side of a synchronization run: the platform playlists are migrated
/// from. Listing failures here are run-fatal, nothing can be synchronized
/// without the source catalog.
#[allow(async_fn_in_trait)]
pub trait SourceCatalog {
    async fn list_playlists(&mut self) -> Result<Vec<PlaylistRef>, CatalogError>;

    /// Returns the playlist's tracks in playlist order. Entries whose track
    /// payload has been removed upstream are skipped; tracks without a
    /// duration are kept (duration only matters for display formatting).
    async fn list_tracks(&mut self, playlist_id: &str) -> Result<Vec<Track>, CatalogError>;
}

/// Write side of a synchronization run: the platform playlists are created
/// on. Implemented by the YouTube client and by test stubs.
#[allow(async_fn_in_trait)]
pub trait DestinationCatalog {
    /// Lists existing playlists as a name-to-id mapping. Where the platform
    /// allows duplicate names, the first listed entry wins.
    async fn list_playlists(&mut self) -> Result<HashMap<String, String>, CatalogError>;

    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        tags: &[String],
        public: bool,
    ) -> Result<String, CatalogError>;

    async fn delete_playlist(&mut self, playlist_id: &str) -> Result<(), CatalogError>;

    /// Returns the identifier of the platform's top-ranked result for the
    /// query, or `None` when the search comes back empty.
    async fn search_top_result(&mut self, query: &str) -> Result<Option<String>, LookupError>;

    async fn add_item(&mut self, playlist_id: &str, item_id: &str) -> Result<(), WriteError>;
}
