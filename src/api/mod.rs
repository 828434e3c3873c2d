//! # API Module
//!
//! HTTP endpoints for the local callback server used during the OAuth
//! authorization flows of both platforms.
//!
//! ## Endpoints
//!
//! - [`spotify_callback`] - Completes Spotify's PKCE flow: exchanges the
//!   authorization code together with the stored code verifier for an access
//!   token.
//! - [`youtube_callback`] - Completes Google's authorization-code flow:
//!   exchanges the code together with the client secret for an access token.
//! - [`health`] - Health check returning application status and version.
//!
//! Both callback handlers deposit the exchanged token into shared state that
//! the corresponding `authorize` function polls; see [`crate::spotify::auth`]
//! and [`crate::youtube::auth`].

mod callback;
mod health;

pub use callback::spotify_callback;
pub use callback::youtube_callback;
pub use health::health;
