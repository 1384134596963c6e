//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_active).post(handler::checkout))
        .route("/history", get(handler::list_history))
        .route("/{id}/deliver", post(handler::deliver))
        .route("/{id}/settle", post(handler::settle))
}
