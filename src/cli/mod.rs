//! # CLI Module
//!
//! The command-line interface layer for spoytcli. It implements all
//! user-facing commands and coordinates between the platform clients, the
//! synchronization core, and user interaction.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the OAuth flows: PKCE against Spotify, authorization
//!   code against Google, or both in sequence
//!
//! ### Browsing
//!
//! - [`playlists`] - Lists Spotify playlists with track counts, prints a
//!   single playlist's tracks, or lists the user's YouTube playlists
//!
//! ### Migration
//!
//! - [`sync`] - Migrates one or all Spotify playlists to YouTube via the
//!   synchronization core
//! - [`delete`] - Deletes a YouTube playlist by name
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Sync Core (Context, Matcher, Synchronizer)
//!     ↓
//! Platform Clients (Spotify, YouTube)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command builds a fresh run-scoped [`crate::sync::SyncContext`], so no
//! cache or index state leaks across invocations. Errors local to one track
//! or one playlist are reported and skipped; only authentication failures and
//! a failed source playlist enumeration abort a command.

mod auth;
mod delete;
mod playlists;
mod sync;

pub use auth::auth;
pub use delete::delete;
pub use playlists::playlists;
pub use sync::sync;
