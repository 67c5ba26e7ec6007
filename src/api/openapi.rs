use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::server::AppState;

pub async fn openapi(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(document(&state.public_base_url))
}

fn query_param(description: &str) -> Value {
    json!([{
        "name": "q",
        "in": "query",
        "required": true,
        "schema": { "type": "string" },
        "description": description,
    }])
}

pub fn document(server_url: &str) -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "OkBo eBay Tools",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "OkBo endpoints for eBay Browse and Sold-link generation",
        },
        "servers": [{ "url": server_url }],
        "paths": {
            "/health": {
                "get": {
                    "operationId": "health",
                    "responses": { "200": { "description": "Health check" } },
                },
            },
            "/ebay/sold-links": {
                "get": {
                    "operationId": "getEbaySoldLinks",
                    "parameters": query_param("Search keywords for eBay completed/sold listings"),
                    "responses": {
                        "200": { "description": "Sold search links" },
                        "400": { "description": "Bad request" },
                    },
                },
            },
            "/ebay/browse": {
                "get": {
                    "operationId": "browseEbay",
                    "parameters": query_param("Search keywords for eBay Browse API"),
                    "responses": {
                        "200": { "description": "Browse search results" },
                        "400": { "description": "Bad request" },
                        "401": { "description": "Token rejected after one refresh" },
                        "500": { "description": "Token or transport failure" },
                    },
                },
            },
        },
    })
}
