use chrono::Utc;
use reqwest::{Client, header};

use crate::{
    ebay::EbayError,
    types::{AppToken, ClientCredentials, DEFAULT_TOKEN_LIFETIME_SECS, TokenResponse},
    utils,
};

/// Requests a fresh application token with the client-credentials grant.
///
/// Sends a single POST to `token_url` with a Basic authorization header built
/// from the client id and secret and a form body of
/// `grant_type=client_credentials&scope=<scope>`.
///
/// # Returns
///
/// An [`AppToken`] whose expiry is `now + max(0, expires_in - 60)` seconds.
/// A response without `expires_in` is treated as a 7200 second lifetime.
///
/// # Errors
///
/// - [`EbayError::CredentialFetch`] for a non-2xx status, an unparsable body
///   or a 2xx body without `access_token`. It carries the status and the raw
///   body and is never retried here.
/// - [`EbayError::Transport`] when no response arrives.
pub async fn fetch_app_token(
    http: &Client,
    token_url: &str,
    scope: &str,
    credentials: &ClientCredentials,
) -> Result<AppToken, EbayError> {
    tracing::debug!("requesting application token from {}", token_url);

    let res = http
        .post(token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[("grant_type", "client_credentials"), ("scope", scope)])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(EbayError::CredentialFetch {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: Option<TokenResponse> = serde_json::from_str(&body).ok();
    let Some(TokenResponse {
        access_token: Some(access_token),
        expires_in,
        ..
    }) = parsed
    else {
        return Err(EbayError::CredentialFetch {
            status: status.as_u16(),
            body,
        });
    };

    if access_token.is_empty() {
        return Err(EbayError::CredentialFetch {
            status: status.as_u16(),
            body,
        });
    }

    Ok(AppToken::issued(
        access_token,
        expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS),
        Utc::now(),
    ))
}
