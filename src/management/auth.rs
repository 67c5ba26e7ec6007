use std::sync::Arc;

use chrono::Utc;
use reqwest::Client;
use tokio::sync::RwLock;

use crate::{
    config::EbayEndpoints,
    ebay::{EbayError, auth::fetch_app_token},
    types::{AppToken, ClientCredentials},
    utils,
};

/// Supplies client credentials to the token manager.
///
/// Consulted once per refresh attempt, so a missing credential surfaces as an
/// [`EbayError::Configuration`] before any network call is made.
pub trait CredentialSource: Send + Sync {
    fn client_credentials(&self) -> Result<ClientCredentials, EbayError>;
}

impl CredentialSource for ClientCredentials {
    fn client_credentials(&self) -> Result<ClientCredentials, EbayError> {
        Ok(self.clone())
    }
}

/// Owns the single cached application token of the process.
///
/// Refreshing is lazy: it happens on the first read that finds the token
/// absent or expired. The lock is never held across the token request, so
/// concurrent callers racing on an expired token may each refresh; the stored
/// record is always the one written by the last refresh to complete.
pub struct TokenManager {
    http: Client,
    token_url: String,
    scope: String,
    credentials: Arc<dyn CredentialSource>,
    token: RwLock<AppToken>,
}

impl TokenManager {
    pub fn new(
        http: Client,
        endpoints: &EbayEndpoints,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        TokenManager {
            http,
            token_url: endpoints.token_url.clone(),
            scope: endpoints.scope.clone(),
            credentials,
            token: RwLock::new(AppToken::empty()),
        }
    }

    /// Returns the cached token while it is valid, otherwise refreshes.
    ///
    /// A cache hit performs no I/O. A refresh stores the new record and
    /// returns its value; refresh failures propagate untouched.
    pub async fn get_valid_token(&self) -> Result<String, EbayError> {
        if let Some(value) = self.token.read().await.valid_at(Utc::now()) {
            return Ok(value.to_string());
        }
        self.refresh().await
    }

    /// Drops the cached token so the next read refreshes.
    pub async fn invalidate(&self) {
        *self.token.write().await = AppToken::empty();
    }

    /// Snapshot of the cached record.
    pub async fn current_token(&self) -> AppToken {
        self.token.read().await.clone()
    }

    async fn refresh(&self) -> Result<String, EbayError> {
        let credentials = self.credentials.client_credentials()?;
        let fresh = fetch_app_token(&self.http, &self.token_url, &self.scope, &credentials).await?;

        // fetch_app_token only builds records that hold a value
        let value = fresh.value.clone().unwrap_or_default();
        tracing::info!(
            "application token refreshed: {} (expires {})",
            utils::mask_token(&value),
            fresh.expires_at
        );

        *self.token.write().await = fresh;
        Ok(value)
    }
}
