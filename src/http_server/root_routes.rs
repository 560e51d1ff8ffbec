//! Root and Health Routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::item_routes::ItemsState;

pub const WELCOME_MESSAGE: &str =
    "Welcome to itemd, an item service backed by an in-memory store!";

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub items: usize,
}

/// Create root and health routes
pub fn root_routes(state: Arc<ItemsState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

async fn health_handler(State(state): State<Arc<ItemsState>>) -> ApiResult<impl IntoResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        items: state.store.len()?,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Fallback for unmatched routes
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}
