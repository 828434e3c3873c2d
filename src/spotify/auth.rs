use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    success,
    types::{PkceToken, Platform, Token},
    utils, warning,
};

/// Runs the OAuth 2.0 PKCE authorization flow against Spotify.
///
/// Generates the PKCE verifier and challenge, stores the verifier in the
/// shared state for the callback handler, opens the authorization URL in the
/// user's browser and waits for the callback to complete the token exchange.
/// The obtained token is persisted for future API requests.
///
/// The local callback server must already be running; see
/// [`crate::server::start_api_server`].
///
/// # Arguments
///
/// * `shared_state` - Thread-safe state shared with the callback handler,
///   carrying the code verifier out and the exchanged token back
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn authorize(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(Platform::Spotify, t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save Spotify token to cache: {}", e);
            }

            success!("Spotify authentication successful!");
        }
        None => {
            error!("Spotify authentication failed or timed out.");
        }
    }
}

/// Polls the shared state for a completed token with a 60-second timeout.
/// Runs concurrently with the callback handler that populates the token
/// after a successful exchange.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
