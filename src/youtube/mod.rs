//! # YouTube Integration Module
//!
//! Destination-catalog side of the migration: authentication against the
//! YouTube Data API v3 and the playlist write operations the synchronizer
//! drives.
//!
//! ## Modules
//!
//! - [`auth`] - Google OAuth 2.0 authorization-code flow. Unlike Spotify's
//!   PKCE flow, Google's installed-application flow requires the client
//!   secret for the token exchange; `access_type=offline` and
//!   `prompt=consent` ensure a refresh token is issued.
//! - [`catalog`] - [`catalog::YoutubeCatalog`], the
//!   [`crate::sync::DestinationCatalog`] implementation: playlist listing,
//!   idempotent-creation support, deletion, top-result video search, and the
//!   playlist-item insert whose failure classes (conflict, quota, timeout)
//!   feed the synchronizer's retry policy.
//!
//! ## API Coverage
//!
//! - `GET /playlists?mine=true` - the user's playlists for the name index
//! - `POST /playlists` - playlist creation
//! - `DELETE /playlists` - playlist deletion
//! - `GET /search` - top-ranked video for a text query
//! - `POST /playlistItems` - appending a video to a playlist
//!
//! ## Write failure mapping
//!
//! The Data API signals duplicate/concurrent-state trouble with 409 and
//! quota exhaustion with 403 carrying a quota reason (or a plain 429). Both
//! are transient for the retry policy; any other non-2xx aborts the write
//! immediately.

pub mod auth;
pub mod catalog;

pub use catalog::YoutubeCatalog;
