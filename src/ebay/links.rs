//! Sold/completed listing links.
//!
//! These point at eBay's web search, which has no API counterpart. Building
//! them is pure string formatting.

pub use crate::types::SoldLinks;

use crate::utils;

pub const SOLD_SEARCH_URL: &str = "https://www.ebay.com/sch/i.html";

/// eBay's broad "Sports Trading Cards" category on ebay.com.
pub const SPORTS_CARDS_CATEGORY: u32 = 212;

/// Builds a sold + completed search URL with optional extra parameters.
///
/// `extra_params` is appended verbatim and must start with `&`.
pub fn sold_url(keywords: &str, extra_params: &str) -> String {
    format!(
        "{SOLD_SEARCH_URL}?_nkw={}&LH_Sold=1&LH_Complete=1&rt=nc{extra_params}",
        utils::encode_keywords(keywords)
    )
}

impl SoldLinks {
    /// The core, auction-only and category-restricted links for `keywords`.
    pub fn for_query(keywords: &str) -> Self {
        SoldLinks {
            core: sold_url(keywords, ""),
            auction_only: sold_url(keywords, "&LH_Auction=1"),
            category: sold_url(keywords, &format!("&_sacat={SPORTS_CARDS_CATEGORY}")),
        }
    }
}
