use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    api, config, error,
    types::{PendingToken, PkceToken},
};

pub async fn start_api_server(
    spotify_state: Arc<Mutex<Option<PkceToken>>>,
    youtube_state: Arc<Mutex<Option<PendingToken>>>,
) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route(
            "/callback/spotify",
            get(api::spotify_callback).layer(Extension(spotify_state)),
        )
        .route(
            "/callback/youtube",
            get(api::youtube_callback).layer(Extension(youtube_state)),
        );

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
