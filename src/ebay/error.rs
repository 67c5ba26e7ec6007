//! eBay integration error types.

/// Errors raised while talking to eBay or validating inbound requests.
#[derive(Debug, thiserror::Error)]
pub enum EbayError {
    /// A required setting (client id or secret) is missing.
    #[error("{0}")]
    Configuration(String),

    /// The token endpoint answered with a non-2xx status or without a token.
    #[error("Token fetch failed: {status} {body}")]
    CredentialFetch { status: u16, body: String },

    /// The search API rejected the bearer token (401), even after a refresh.
    #[error("eBay rejected the application token: {status} {body}")]
    UpstreamRejected { status: u16, body: String },

    /// Any other non-2xx answer from the search API.
    #[error("eBay responded with {status}: {body}")]
    Upstream { status: u16, body: String },

    /// No response was received at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// Inbound input was rejected before any network call.
    #[error("{0}")]
    Validation(String),
}

impl From<reqwest::Error> for EbayError {
    fn from(err: reqwest::Error) -> Self {
        EbayError::Transport(err.to_string())
    }
}
