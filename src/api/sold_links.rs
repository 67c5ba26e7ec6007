use std::collections::HashMap;

use axum::{extract::Query, response::Json};

use crate::{
    ebay::{EbayError, links::SoldLinks, variations::build_variations},
    types::{SoldLinksResponse, SoldLinksVariant},
};

pub async fn sold_links(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SoldLinksResponse>, EbayError> {
    let q = params.get("q").map(|q| q.trim()).unwrap_or_default();
    if q.is_empty() {
        return Err(EbayError::Validation("Missing q query param".to_string()));
    }

    let variations = build_variations(q)
        .into_iter()
        .map(|query| SoldLinksVariant {
            links: SoldLinks::for_query(&query),
            query,
        })
        .collect();

    Ok(Json(SoldLinksResponse {
        query: q.to_string(),
        links: SoldLinks::for_query(q),
        variations,
    }))
}
