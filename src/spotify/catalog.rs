use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    sync::{CatalogError, SourceCatalog},
    types::{
        Platform, PlaylistRef, PlaylistTracksResponse, Track, UserPlaylistsResponse,
        UserProfileResponse,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only client for the user's Spotify library. Holds the token manager
/// for the whole run so refreshes happen transparently between requests.
pub struct SpotifyCatalog {
    token_mgr: TokenManager,
}

impl SpotifyCatalog {
    /// Loads the persisted Spotify token. Fails with an auth error when no
    /// token has been stored yet.
    pub async fn connect() -> Result<Self, CatalogError> {
        let token_mgr = TokenManager::load(Platform::Spotify).await.map_err(|e| {
            CatalogError::Auth(format!(
                "no Spotify token found, run `spoytcli auth --platform spotify` first ({})",
                e
            ))
        })?;

        Ok(Self { token_mgr })
    }

    /// The authenticated user's display name, for playlist listings.
    pub async fn display_name(&mut self) -> Result<String, CatalogError> {
        let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());
        let profile: UserProfileResponse = self.get_json(&api_url).await?;

        Ok(profile
            .display_name
            .unwrap_or_else(|| "Unknown Name".to_string()))
    }

    /// Authenticated GET with transient 502 retry. Other error statuses are
    /// propagated immediately.
    async fn get_json<T: DeserializeOwned>(&mut self, api_url: &str) -> Result<T, CatalogError> {
        loop {
            let token = self.token_mgr.get_valid_token().await;

            let client = Client::new();
            let response = client
                .get(api_url)
                .bearer_auth(token)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await;

            let response = match response {
                Ok(resp) => match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err.into()); // propagate other errors
                    }
                },
                Err(err) => {
                    return Err(err.into());
                } // network or reqwest error
            };

            return Ok(response.json::<T>().await?);
        }
    }
}

impl SourceCatalog for SpotifyCatalog {
    async fn list_playlists(&mut self) -> Result<Vec<PlaylistRef>, CatalogError> {
        let mut playlists = Vec::new();
        let mut url = Some(format!(
            "{uri}/me/playlists?limit=50",
            uri = &config::spotify_apiurl()
        ));

        while let Some(api_url) = url {
            let page: UserPlaylistsResponse = self.get_json(&api_url).await?;
            playlists.extend(page.items.into_iter().map(|p| PlaylistRef {
                id: p.id,
                name: p.name,
            }));
            url = page.next;
        }

        Ok(playlists)
    }

    async fn list_tracks(&mut self, playlist_id: &str) -> Result<Vec<Track>, CatalogError> {
        let mut tracks = Vec::new();
        let mut url = Some(format!(
            "{uri}/playlists/{id}/tracks?limit=100",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        ));

        while let Some(api_url) = url {
            let page: PlaylistTracksResponse = self.get_json(&api_url).await?;

            for item in page.items {
                // Removed or unavailable entries carry a null track payload.
                let Some(track) = item.track else {
                    continue;
                };

                tracks.push(Track {
                    name: track.name,
                    artists: track.artists.into_iter().map(|a| a.name).collect(),
                    duration_ms: track.duration_ms,
                });
            }

            url = page.next;
        }

        Ok(tracks)
    }
}
