//! # Spotify Integration Module
//!
//! Source-catalog side of the migration: authentication against the Spotify
//! Web API and read access to the user's playlists and their tracks.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE authorization flow. Generates the code
//!   verifier/challenge pair, opens the consent URL in the browser, and waits
//!   for the local callback server to complete the token exchange. PKCE needs
//!   no client secret, which keeps credentials out of the binary and the
//!   token store.
//! - [`catalog`] - [`catalog::SpotifyCatalog`], the
//!   [`crate::sync::SourceCatalog`] implementation. Fetches `/me/playlists`
//!   and `/playlists/{id}/tracks` with cursorless `next`-link pagination,
//!   retries transient 502 responses, and maps the wire schemas into the
//!   crate's `Track` model.
//!
//! ## API Coverage
//!
//! - `GET /me` - display name for playlist listings
//! - `GET /me/playlists` - the user's playlists (paginated)
//! - `GET /playlists/{id}/tracks` - ordered track lists (paginated)
//! - `POST /api/token` - token exchange and refresh
//!
//! Playlist entries whose track payload was removed upstream come back as
//! `null` and are skipped during mapping. Tracks without a duration are kept;
//! duration only matters when formatting track listings for display.

pub mod auth;
pub mod catalog;

pub use catalog::SpotifyCatalog;
