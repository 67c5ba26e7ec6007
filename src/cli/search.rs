use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    ebay::browse,
    error, info,
    server::AppState,
    types::{BrowseResponse, ItemTableRow},
};

pub async fn search(words: Vec<String>, limit: u32) {
    let query = words.join(" ");
    let state = Arc::new(AppState::from_env());

    let pb = spinner("Searching eBay Browse API...");
    let result = browse::search(
        &state.http,
        &state.tokens,
        &state.endpoints.browse_url,
        &query,
        limit,
    )
    .await;
    pb.finish_and_clear();

    let upstream = match result {
        Ok(upstream) => upstream,
        Err(e) => error!("Search failed: {}", e),
    };

    info!("STATUS: {}", upstream.status);
    let body = match upstream.into_result() {
        Ok(body) => body,
        Err(e) => error!("{}", e),
    };

    let response: BrowseResponse = match serde_json::from_str(&body) {
        Ok(response) => response,
        Err(e) => error!("Unexpected Browse API payload: {}", e),
    };

    info!(
        "TOTAL: {}",
        response
            .total
            .map(|t| t.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    );

    let rows: Vec<ItemTableRow> = response
        .item_summaries
        .into_iter()
        .map(|item| ItemTableRow {
            title: item.title,
            price: item
                .price
                .map(|p| format!("{} {}", p.value, p.currency))
                .unwrap_or_else(|| "no price".to_string()),
            url: item.item_web_url.unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
