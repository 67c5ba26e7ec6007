//! # API Module
//!
//! HTTP handlers for the OkBo proxy server.
//!
//! ## Endpoints
//!
//! - [`health`] - status, crate version and build stamp
//! - [`browse`] - proxies `q` to the eBay Browse API and relays the upstream
//!   status and body verbatim; a rejected token is refreshed and the call
//!   retried exactly once
//! - [`sold_links`] - sold/completed listing links for `q` and its variations,
//!   built without any network call
//! - [`openapi`] - OpenAPI 3.1.0 description of the endpoints above
//!
//! Handlers receive the shared [`crate::server::AppState`] through an axum
//! `Extension`. Failures leave as `{"error": "<message>"}` JSON; nothing is
//! logged and swallowed.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use okbo::{server::{AppState, router}};
//!
//! let app = router(Arc::new(AppState::from_env()?));
//! ```

mod browse;
mod health;
mod openapi;
mod sold_links;

pub use browse::browse;
pub use health::health;
pub use openapi::openapi;
pub use sold_links::sold_links;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::ebay::EbayError;

impl EbayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EbayError::Validation(_) => StatusCode::BAD_REQUEST,
            EbayError::Configuration(_) | EbayError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            EbayError::CredentialFetch { .. } => StatusCode::BAD_GATEWAY,
            EbayError::UpstreamRejected { status, .. } | EbayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for EbayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!("request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
