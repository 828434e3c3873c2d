use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    types::{Platform, Token},
};

pub struct TokenManager {
    platform: Platform,
    token: Token,
}

impl TokenManager {
    pub fn new(platform: Platform, token: Token) -> Self {
        TokenManager { platform, token }
    }

    pub async fn load(platform: Platform) -> Result<Self, String> {
        let path = Self::token_path(platform);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { platform, token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path(self.platform);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = self.refresh_token().await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    // Refresh 4 minutes before actual expiry.
    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    async fn refresh_token(&self) -> Result<Token, String> {
        let client = Client::new();
        let res = match self.platform {
            Platform::Spotify => {
                let client_id = config::spotify_client_id();
                client
                    .post(config::spotify_apitoken_url())
                    .form(&[
                        ("grant_type", "refresh_token"),
                        ("refresh_token", self.token.refresh_token.as_str()),
                        ("client_id", client_id.as_str()),
                    ])
                    .send()
                    .await
            }
            Platform::Youtube => {
                let client_id = config::youtube_client_id();
                let client_secret = config::youtube_client_secret();
                client
                    .post(config::youtube_apitoken_url())
                    .form(&[
                        ("grant_type", "refresh_token"),
                        ("refresh_token", self.token.refresh_token.as_str()),
                        ("client_id", client_id.as_str()),
                        ("client_secret", client_secret.as_str()),
                    ])
                    .send()
                    .await
            }
        }
        .map_err(|e| e.to_string())?;

        let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

        // Google omits the refresh token in refresh responses; keep the stored one.
        Ok(Token {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            refresh_token: json["refresh_token"]
                .as_str()
                .unwrap_or(&self.token.refresh_token)
                .to_string(),
            scope: json["scope"].as_str().unwrap_or(&self.token.scope).to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    fn token_path(platform: Platform) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("spoytcli/cache/{}-token.json", platform));
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
