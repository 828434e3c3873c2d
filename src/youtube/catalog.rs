use std::{collections::HashMap, time::Duration};

use reqwest::{Client, StatusCode};

use crate::{
    config,
    management::TokenManager,
    sync::{CatalogError, DestinationCatalog, LookupError, WriteError},
    types::{
        AddPlaylistItemRequest, ApiErrorResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CreatePlaylistSnippet, Platform, PlaylistItemSnippet, PlaylistListResponse, PlaylistStatus,
        ResourceId, SearchListResponse,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Write-capable client for the user's YouTube playlists. Holds the token
/// manager for the whole run so refreshes happen transparently between
/// requests.
pub struct YoutubeCatalog {
    token_mgr: TokenManager,
}

impl YoutubeCatalog {
    /// Loads the persisted YouTube token. Fails with an auth error when no
    /// token has been stored yet.
    pub async fn connect() -> Result<Self, CatalogError> {
        let token_mgr = TokenManager::load(Platform::Youtube).await.map_err(|e| {
            CatalogError::Auth(format!(
                "no YouTube token found, run `spoytcli auth --platform youtube` first ({})",
                e
            ))
        })?;

        Ok(Self { token_mgr })
    }
}

impl DestinationCatalog for YoutubeCatalog {
    async fn list_playlists(&mut self) -> Result<HashMap<String, String>, CatalogError> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!("{uri}/playlists", uri = &config::youtube_apiurl());

        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[("part", "snippet"), ("mine", "true"), ("maxResults", "50")])
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<PlaylistListResponse>().await?;

        let mut index = HashMap::new();
        for playlist in page.items {
            // Duplicate titles: the first listed entry wins.
            index.entry(playlist.snippet.title).or_insert(playlist.id);
        }

        Ok(index)
    }

    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        tags: &[String],
        public: bool,
    ) -> Result<String, CatalogError> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!("{uri}/playlists", uri = &config::youtube_apiurl());

        let body = CreatePlaylistRequest {
            snippet: CreatePlaylistSnippet {
                title: name.to_string(),
                description: description.to_string(),
                tags: tags.to_vec(),
                default_language: "en".to_string(),
            },
            status: PlaylistStatus {
                privacy_status: if public { "public" } else { "private" }.to_string(),
            },
        };

        let client = Client::new();
        let response = client
            .post(&api_url)
            .query(&[("part", "snippet,status")])
            .bearer_auth(token)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let created = response.json::<CreatePlaylistResponse>().await?;
        Ok(created.id)
    }

    async fn delete_playlist(&mut self, playlist_id: &str) -> Result<(), CatalogError> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!("{uri}/playlists", uri = &config::youtube_apiurl());

        let client = Client::new();
        client
            .delete(&api_url)
            .query(&[("id", playlist_id)])
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn search_top_result(&mut self, query: &str) -> Result<Option<String>, LookupError> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!("{uri}/search", uri = &config::youtube_apiurl());

        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", "1"),
            ])
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let results = response.json::<SearchListResponse>().await?;

        Ok(results.items.into_iter().next().and_then(|r| r.id.video_id))
    }

    async fn add_item(&mut self, playlist_id: &str, item_id: &str) -> Result<(), WriteError> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!("{uri}/playlistItems", uri = &config::youtube_apiurl());

        let body = AddPlaylistItemRequest {
            snippet: PlaylistItemSnippet {
                playlist_id: playlist_id.to_string(),
                resource_id: ResourceId {
                    kind: "youtube#video".to_string(),
                    video_id: item_id.to_string(),
                },
            },
        };

        let client = Client::new();
        let response = client
            .post(&api_url)
            .query(&[("part", "snippet")])
            .bearer_auth(token)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) if err.is_timeout() => return Err(WriteError::Timeout),
            Err(err) => return Err(WriteError::Other(err.to_string())),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status == StatusCode::CONFLICT {
            return Err(WriteError::Conflict);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WriteError::Quota);
        }

        // Quota exhaustion comes back as 403 with a quota reason in the body.
        if status == StatusCode::FORBIDDEN {
            if let Ok(api_error) = response.json::<ApiErrorResponse>().await {
                let quota = api_error.error.errors.iter().any(|e| {
                    e.reason
                        .as_deref()
                        .is_some_and(|r| r.contains("quota") || r.contains("rateLimit"))
                });
                if quota {
                    return Err(WriteError::Quota);
                }

                return Err(WriteError::Other(
                    api_error.error.message.unwrap_or_else(|| status.to_string()),
                ));
            }

            return Err(WriteError::Other(status.to_string()));
        }

        Err(WriteError::Other(status.to_string()))
    }
}
