use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Seconds shaved off every token lifetime when it is issued.
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 60;

/// Lifetime assumed when the token endpoint omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 7200;

/// The cached application token.
///
/// The safety margin is applied once, when the record is issued; reads only
/// compare against `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppToken {
    pub value: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl AppToken {
    /// A record holding no token, already expired.
    pub fn empty() -> Self {
        AppToken {
            value: None,
            expires_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    pub fn issued(value: String, expires_in: i64, now: DateTime<Utc>) -> Self {
        let lifetime = expires_in.saturating_sub(TOKEN_SAFETY_MARGIN_SECS).max(0);
        // lifetimes beyond chrono's range pin the expiry to the latest instant
        let expires_at = Duration::try_seconds(lifetime)
            .and_then(|d| now.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        AppToken {
            value: Some(value),
            expires_at,
        }
    }

    /// Returns the token when it is present and `now` is before expiry.
    pub fn valid_at(&self, now: DateTime<Utc>) -> Option<&str> {
        match &self.value {
            Some(value) if now < self.expires_at => Some(value.as_str()),
            _ => None,
        }
    }
}

impl Default for AppToken {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Raw answer from the Browse API, kept verbatim for pass-through.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub total: Option<u64>,
    #[serde(default)]
    pub item_summaries: Vec<ItemSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub title: String,
    pub price: Option<Price>,
    pub item_web_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub value: String,
    pub currency: String,
}

#[derive(Tabled)]
pub struct ItemTableRow {
    pub title: String,
    pub price: String,
    pub url: String,
}

/// Sold/completed search links for one keyword string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldLinks {
    pub core: String,
    #[serde(rename = "auctionOnly")]
    pub auction_only: String,
    #[serde(rename = "category212")]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldLinksVariant {
    pub query: String,
    pub links: SoldLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldLinksResponse {
    pub query: String,
    pub links: SoldLinks,
    pub variations: Vec<SoldLinksVariant>,
}
