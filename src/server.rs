use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use reqwest::Client;
use tower_http::trace::TraceLayer;

use crate::{
    Res, api,
    config::{self, EbayEndpoints, EnvCredentials, Environment},
    management::{CredentialSource, TokenManager},
};

/// State shared by every request handler.
///
/// Built once at startup; the token manager inside it is the only
/// application token cache of the process.
pub struct AppState {
    pub http: Client,
    pub tokens: TokenManager,
    pub endpoints: EbayEndpoints,
    pub build: String,
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        http: Client,
        endpoints: EbayEndpoints,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        AppState {
            tokens: TokenManager::new(http.clone(), &endpoints, credentials),
            http,
            endpoints,
            build: config::build_stamp(),
            public_base_url: config::public_base_url(),
        }
    }

    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self::new(
            Client::new(),
            EbayEndpoints::from_env(),
            Arc::new(EnvCredentials::new(environment)),
        )
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/ebay/browse", get(api::browse))
        .route("/ebay/sold-links", get(api::sold_links))
        .route("/openapi.json", get(api::openapi))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
