//! Item HTTP Routes
//!
//! CRUD endpoints over the shared item store.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::payload::{parse_item_id, parse_item_input};
use crate::store::{InMemoryItemStore, Item, ItemId, ItemInput, ItemRepository};

// ==================
// Shared State
// ==================

/// Item state shared across handlers
pub struct ItemsState {
    pub store: Arc<dyn ItemRepository>,
}

impl ItemsState {
    /// Wrap an existing store
    pub fn new(store: Arc<dyn ItemRepository>) -> Self {
        Self { store }
    }

    /// State over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }
}

// ==================
// Item Routes
// ==================

/// Create item routes
pub fn item_routes(state: Arc<ItemsState>) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(state)
}

fn item_id(raw: &str) -> ApiResult<ItemId> {
    parse_item_id(raw).map_err(|e| ApiError::Validation(vec![e]))
}

fn item_input(body: &[u8]) -> ApiResult<ItemInput> {
    parse_item_input(body).map_err(ApiError::Validation)
}

// ==================
// Handlers
// ==================

async fn list_items_handler(State(state): State<Arc<ItemsState>>) -> ApiResult<Json<Vec<Item>>> {
    Ok(Json(state.store.list()?))
}

async fn get_item_handler(
    State(state): State<Arc<ItemsState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Item>> {
    let id = item_id(&raw_id)?;
    Ok(Json(state.store.get(id)?))
}

async fn create_item_handler(
    State(state): State<Arc<ItemsState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let input = item_input(&body)?;
    let item = state.store.create(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item_handler(
    State(state): State<Arc<ItemsState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Item>> {
    // Path and body problems are reported together, before any lookup
    let (id, input) = match (parse_item_id(&raw_id), parse_item_input(&body)) {
        (Ok(id), Ok(input)) => (id, input),
        (id, input) => {
            let mut errors: Vec<_> = id.err().into_iter().collect();
            errors.extend(input.err().unwrap_or_default());
            return Err(ApiError::Validation(errors));
        }
    };
    Ok(Json(state.store.update(id, input)?))
}

async fn delete_item_handler(
    State(state): State<Arc<ItemsState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = item_id(&raw_id)?;
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
