//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::core::ServerState;
use crate::floor::is_dish_available;
use crate::repository::{CatalogRepository, InventoryRepository};
use crate::utils::AppResult;

/// Availability entry: dish name + whether stock covers its recipe
#[derive(Debug, Serialize)]
pub struct DishAvailability {
    pub product_id: String,
    pub name: String,
    pub available: bool,
}

/// GET /api/menu - product catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = CatalogRepository::new(state.store.clone()).products()?;
    Ok(Json(products))
}

/// POST /api/menu - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let product = CatalogRepository::new(state.store.clone()).create_product(payload)?;
    Ok(Json(product))
}

/// PUT /api/menu/:id - update a product
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = CatalogRepository::new(state.store.clone()).update_product(&id, payload)?;
    Ok(Json(product))
}

/// GET /api/menu/availability - per-dish availability from stock on hand
pub async fn availability(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DishAvailability>>> {
    let catalog = CatalogRepository::new(state.store.clone());
    let products = catalog.products()?;
    let recipes = catalog.recipes()?;
    let inventory = InventoryRepository::new(state.store.clone()).list()?;

    let entries = products
        .into_iter()
        .map(|p| DishAvailability {
            available: is_dish_available(&p.name, &recipes, &inventory),
            product_id: p.id,
            name: p.name,
        })
        .collect();
    Ok(Json(entries))
}
