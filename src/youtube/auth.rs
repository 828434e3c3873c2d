use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    success,
    types::{PendingToken, Platform, Token},
    warning,
};

/// Runs the Google OAuth 2.0 authorization-code flow for the YouTube Data
/// API.
///
/// Opens the consent URL in the user's browser and waits for the local
/// callback server to complete the code-for-token exchange. Requests offline
/// access with forced consent so Google issues a refresh token the token
/// manager can use across runs. The obtained token is persisted for future
/// API requests.
///
/// The local callback server must already be running; see
/// [`crate::server::start_api_server`].
pub async fn authorize(shared_state: Arc<Mutex<Option<PendingToken>>>) {
    let auth_url = format!(
        "{youtube_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&access_type=offline&prompt=consent",
        youtube_auth_url = &config::youtube_apiauth_url(),
        client_id = &config::youtube_client_id(),
        redirect_uri = &config::youtube_redirect_uri(),
        scope = &config::youtube_scope()
    );

    // Mark the flow as pending so the callback handler accepts the code
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PendingToken { token: None });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(Platform::Youtube, t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save YouTube token to cache: {}", e);
            }

            success!("YouTube authentication successful!");
        }
        None => {
            error!("YouTube authentication failed or timed out.");
        }
    }
}

/// Polls the shared state for a completed token with a 60-second timeout.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PendingToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pending) = lock.as_ref() {
            if let Some(token) = &pending.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
