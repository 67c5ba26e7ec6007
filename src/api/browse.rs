use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{ebay::browse, server::AppState};

pub async fn browse(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let q = params.get("q").map(String::as_str).unwrap_or_default();

    match browse::search(
        &state.http,
        &state.tokens,
        &state.endpoints.browse_url,
        q,
        browse::DEFAULT_LIMIT,
    )
    .await
    {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                upstream.body,
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
