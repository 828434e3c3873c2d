//! # Synchronization Core
//!
//! This module implements the track-matching and playlist-synchronization
//! workflow: it takes a Spotify playlist read by the source catalog and turns
//! it into a populated YouTube playlist, one matched video at a time.
//!
//! ## Components
//!
//! - [`SourceCatalog`] / [`DestinationCatalog`] - capability traits over the
//!   two platform clients, so the core never touches HTTP directly and tests
//!   can drive it with stub backends
//! - [`SyncContext`] - run-scoped state: the video lookup cache, the
//!   destination playlist index, and the cancellation flag
//! - [`matcher`] - best-effort track-to-video matching, memoized per run
//! - [`RetryPolicy`] - the single retry-with-backoff policy applied to all
//!   destination write calls
//! - [`synchronizer`] - the per-playlist state machine: resolve-or-create the
//!   destination playlist, match and add each track in source order, apply
//!   retry/backoff on transient write failures, aggregate per-track outcomes
//!
//! ## Control flow
//!
//! ```text
//! SourceCatalog -> SourcePlaylist -> synchronizer
//!     -> matcher (SyncContext cache) -> DestinationCatalog.search
//!     -> DestinationCatalog.add_item (RetryPolicy)
//! ```
//!
//! Tracks are processed strictly sequentially: each add is rate-limited and
//! the destination playlist must mirror source order. A single track's
//! failure never aborts the playlist, and a single playlist's failure never
//! aborts a multi-playlist run; only authentication and source playlist
//! enumeration errors are run-fatal.

mod catalog;
mod context;
pub mod matcher;
mod retry;
pub mod synchronizer;

pub use catalog::{CatalogError, DestinationCatalog, LookupError, SourceCatalog, WriteError};
pub use context::SyncContext;
pub use retry::RetryPolicy;
pub use synchronizer::{DeleteOutcome, SyncReport, TrackOutcome};
