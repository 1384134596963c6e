//! Dining Table API Handlers
//!
//! `list` returns the derived occupancy view; the rest is layout CRUD.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, PositionUpdate, TableState,
};

use crate::core::ServerState;
use crate::floor::derive_occupancy;
use crate::repository::{OrderRepository, TableRepository};
use crate::utils::AppResult;

/// GET /api/tables - layout with derived occupancy
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TableState>>> {
    let tables = TableRepository::new(state.store.clone()).list()?;
    let active = OrderRepository::new(state.store.clone()).active()?;
    Ok(Json(derive_occupancy(&tables, &active)))
}

/// POST /api/tables - create a table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    let table = TableRepository::new(state.store.clone()).create(payload)?;
    Ok(Json(table))
}

/// PUT /api/tables/:id - update a table
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = TableRepository::new(state.store.clone()).update(&id, payload)?;
    Ok(Json(table))
}

/// PUT /api/tables/:id/position - apply a drag event from the layout editor
pub async fn update_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PositionUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = TableRepository::new(state.store.clone()).update_position(&id, payload)?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - remove a table from the layout
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = TableRepository::new(state.store.clone()).delete(&id)?;
    Ok(Json(removed))
}
