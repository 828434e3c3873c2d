//! Configuration management for the Spotify to YouTube playlist migrator.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the API credentials of both platforms, server settings,
//! and other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spoytcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spoytcli/.env`
/// - macOS: `~/Library/Application Support/spoytcli/.env`
/// - Windows: `%LOCALAPPDATA%/spoytcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoytcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flows.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application settings.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://localhost:8080/callback/spotify"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// The scope determines what API operations the application can perform on
/// behalf of the user. Reading private and collaborative playlists requires
/// the corresponding playlist-read scopes.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
///
/// # Example
///
/// ```
/// let scope = spotify_scope(); // e.g., "playlist-read-private playlist-read-collaborative"
/// ```
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let auth_url = spotify_apiauth_url(); // e.g., "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Google API client ID used for the YouTube Data API.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn youtube_client_id() -> String {
    env::var("YOUTUBE_API_AUTH_CLIENT_ID").expect("YOUTUBE_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Google API client secret used for the YouTube Data API.
///
/// Google's OAuth flow for installed applications requires the client secret
/// for the token exchange, unlike Spotify's PKCE flow.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn youtube_client_secret() -> String {
    env::var("YOUTUBE_API_AUTH_CLIENT_SECRET").expect("YOUTUBE_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the YouTube OAuth redirect URI.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = youtube_redirect_uri(); // e.g., "http://localhost:8080/callback/youtube"
/// ```
pub fn youtube_redirect_uri() -> String {
    env::var("YOUTUBE_API_REDIRECT_URI").expect("YOUTUBE_API_REDIRECT_URI must be set")
}

/// Returns the YouTube API scope permissions.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_SCOPE` environment variable is not set.
///
/// # Example
///
/// ```
/// let scope = youtube_scope(); // e.g., "https://www.googleapis.com/auth/youtube.force-ssl"
/// ```
pub fn youtube_scope() -> String {
    env::var("YOUTUBE_API_AUTH_SCOPE").expect("YOUTUBE_API_AUTH_SCOPE must be set")
}

/// Returns the Google OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_AUTH_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let auth_url = youtube_apiauth_url(); // e.g., "https://accounts.google.com/o/oauth2/v2/auth"
/// ```
pub fn youtube_apiauth_url() -> String {
    env::var("YOUTUBE_API_AUTH_URL").expect("YOUTUBE_API_AUTH_URL must be set")
}

/// Returns the YouTube Data API base URL.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = youtube_apiurl(); // e.g., "https://www.googleapis.com/youtube/v3"
/// ```
pub fn youtube_apiurl() -> String {
    env::var("YOUTUBE_API_URL").expect("YOUTUBE_API_URL must be set")
}

/// Returns the Google OAuth token exchange URL.
///
/// # Panics
///
/// Panics if the `YOUTUBE_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = youtube_apitoken_url(); // e.g., "https://oauth2.googleapis.com/token"
/// ```
pub fn youtube_apitoken_url() -> String {
    env::var("YOUTUBE_API_TOKEN_URL").expect("YOUTUBE_API_TOKEN_URL must be set")
}
