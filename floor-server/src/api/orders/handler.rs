//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::{Order, OrderLineItem};

use crate::core::ServerState;
use crate::orders::OrderManager;
use crate::utils::AppResult;

/// Checkout payload
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub table_id: String,
    pub items: Vec<OrderLineItem>,
    pub note: Option<String>,
}

/// POST /api/orders - place an order from a cart
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<Order>> {
    let manager = OrderManager::new(state.store.clone());
    let order = manager.checkout(&payload.table_id, payload.items, payload.note)?;
    Ok(Json(order))
}

/// GET /api/orders - active orders
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let manager = OrderManager::new(state.store.clone());
    Ok(Json(manager.active_orders()?))
}

/// GET /api/orders/history - paid history
pub async fn list_history(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let manager = OrderManager::new(state.store.clone());
    Ok(Json(manager.history()?))
}

/// POST /api/orders/:id/deliver - mark as served to the table
pub async fn deliver(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let manager = OrderManager::new(state.store.clone());
    Ok(Json(manager.mark_delivered(&id)?))
}

/// POST /api/orders/:id/settle - pay and move into history
pub async fn settle(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let manager = OrderManager::new(state.store.clone());
    Ok(Json(manager.settle(&id)?))
}
