use reqwest::{Client, StatusCode, header};

use crate::{ebay::EbayError, management::TokenManager, types::UpstreamResponse};

/// Minimum trimmed length of an inbound search query.
pub const MIN_QUERY_LEN: usize = 3;

/// Result count requested from the Browse API by the proxy.
pub const DEFAULT_LIMIT: u32 = 10;

/// Trims a query and rejects it when it is too short to send upstream.
pub fn validate_query(raw: &str) -> Result<&str, EbayError> {
    let q = raw.trim();
    if q.chars().count() < MIN_QUERY_LEN {
        return Err(EbayError::Validation("Query too short".to_string()));
    }
    Ok(q)
}

/// Searches the Browse API with the cached application token.
///
/// When the first answer is `401 Unauthorized` the cached token is
/// invalidated and the request is sent once more with a freshly fetched
/// token. Whatever the second answer is gets returned; there is never a third
/// call. Every other status, success or not, comes back untouched so the
/// caller can pass it through.
///
/// # Errors
///
/// - [`EbayError::Validation`] for queries shorter than three characters,
///   before any network call.
/// - Token failures from [`TokenManager::get_valid_token`].
/// - [`EbayError::Transport`] when the Browse API cannot be reached.
pub async fn search(
    http: &Client,
    tokens: &TokenManager,
    browse_url: &str,
    query: &str,
    limit: u32,
) -> Result<UpstreamResponse, EbayError> {
    let q = validate_query(query)?;

    let first = call_once(http, tokens, browse_url, q, limit).await?;
    if first.status != StatusCode::UNAUTHORIZED.as_u16() {
        return Ok(first);
    }

    tracing::warn!("Browse API rejected the application token, refreshing once");
    tokens.invalidate().await;
    call_once(http, tokens, browse_url, q, limit).await
}

async fn call_once(
    http: &Client,
    tokens: &TokenManager,
    browse_url: &str,
    q: &str,
    limit: u32,
) -> Result<UpstreamResponse, EbayError> {
    let token = tokens.get_valid_token().await?;

    tracing::debug!("searching Browse API: q={}", q);
    let limit = limit.to_string();
    let res = http
        .get(browse_url)
        .query(&[("q", q), ("limit", limit.as_str())])
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = res.status().as_u16();
    let body = res.text().await?;
    tracing::debug!("Browse API response status: {}", status);

    Ok(UpstreamResponse { status, body })
}

impl UpstreamResponse {
    /// Turns a non-2xx answer into the matching [`EbayError`].
    pub fn into_result(self) -> Result<String, EbayError> {
        match self.status {
            200..=299 => Ok(self.body),
            401 => Err(EbayError::UpstreamRejected {
                status: self.status,
                body: self.body,
            }),
            status => Err(EbayError::Upstream {
                status,
                body: self.body,
            }),
        }
    }
}
