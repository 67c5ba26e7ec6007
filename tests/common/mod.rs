#![allow(dead_code)]

use std::sync::Arc;

use okbo::{
    config::{API_SCOPE, EbayEndpoints},
    ebay::EbayError,
    management::{CredentialSource, TokenManager},
    types::ClientCredentials,
};
use reqwest::Client;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TOKEN_PATH: &str = "/identity/v1/oauth2/token";
pub const BROWSE_PATH: &str = "/buy/browse/v1/item_summary/search";

/// base64("client-id:client-secret")
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

pub struct MissingCredentials;

impl CredentialSource for MissingCredentials {
    fn client_credentials(&self) -> Result<ClientCredentials, EbayError> {
        Err(EbayError::Configuration(
            "Missing EBAY_PROD_CLIENT_ID in environment variables".to_string(),
        ))
    }
}

pub fn credentials() -> Arc<dyn CredentialSource> {
    Arc::new(ClientCredentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
    })
}

/// Nothing listens on port 1, so connections are refused.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub fn endpoints(server: &MockServer) -> EbayEndpoints {
    EbayEndpoints {
        token_url: format!("{}{}", server.uri(), TOKEN_PATH),
        browse_url: format!("{}{}", server.uri(), BROWSE_PATH),
        scope: API_SCOPE.to_string(),
    }
}

pub fn token_manager(server: &MockServer, credentials: Arc<dyn CredentialSource>) -> TokenManager {
    TokenManager::new(Client::new(), &endpoints(server), credentials)
}

pub fn token_body(access_token: &str, expires_in: i64) -> serde_json::Value {
    json!({
        "access_token": access_token,
        "expires_in": expires_in,
        "token_type": "Application Access Token",
    })
}

/// Mounts a token endpoint answering with `access_token`, expected `times` times.
pub async fn mount_token(server: &MockServer, access_token: &str, expires_in: i64, times: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token, expires_in)))
        .expect(times)
        .mount(server)
        .await;
}
