//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{InventoryItem, InventoryItemUpdate};

use crate::core::ServerState;
use crate::repository::InventoryRepository;
use crate::utils::AppResult;

/// GET /api/inventory - all stock items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = InventoryRepository::new(state.store.clone()).list()?;
    Ok(Json(items))
}

/// PUT /api/inventory/:id - create or update a stock item
pub async fn upsert(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItem>> {
    let item = InventoryRepository::new(state.store.clone()).upsert(&id, payload)?;
    Ok(Json(item))
}
