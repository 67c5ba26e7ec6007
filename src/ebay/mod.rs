//! # eBay Integration Module
//!
//! Everything that knows about eBay's wire formats lives here:
//!
//! - [`auth`] - client-credentials token fetch (one POST per refresh)
//! - [`browse`] - Browse API search with a single retry on a rejected token
//! - [`variations`] - rewrites one card description into ranked keyword variants
//! - [`links`] - sold/completed listing URLs for the web search surface
//! - [`error`] - the [`EbayError`] taxonomy shared by all of the above
//!
//! ## Flow
//!
//! ```text
//! api / cli
//!     ↓
//! management::TokenManager ──→ auth::fetch_app_token ──→ token endpoint
//!     ↓
//! browse::search ──→ Browse API (401 → invalidate → one retry)
//!
//! variations::build_variations ──→ links::SoldLinks (no network)
//! ```
//!
//! Sold listings have no API, so [`links`] only formats URLs for a human to
//! open in a browser.

pub mod auth;
pub mod browse;
pub mod error;
pub mod links;
pub mod variations;

pub use error::EbayError;
