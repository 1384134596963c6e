//! HTTP server assembly

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;

use super::ServerState;

/// Build the full application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::menu::router())
        .merge(api::statistics::router())
        .merge(api::tables::router())
        .merge(api::orders::router())
        .merge(api::inventory::router())
        .merge(api::recipes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn serve(state: ServerState) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "floor-server listening");

    let app = build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
