//! Recipe API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Recipe, RecipeUpsert};

use crate::core::ServerState;
use crate::repository::CatalogRepository;
use crate::utils::AppResult;

/// GET /api/recipes - the recipe book
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Recipe>>> {
    let recipes = CatalogRepository::new(state.store.clone()).recipes()?;
    Ok(Json(recipes))
}

/// PUT /api/recipes/:dish - create or replace a dish's recipe
pub async fn upsert(
    State(state): State<ServerState>,
    Path(dish): Path<String>,
    Json(payload): Json<RecipeUpsert>,
) -> AppResult<Json<Recipe>> {
    let recipe = CatalogRepository::new(state.store.clone()).upsert_recipe(&dish, payload)?;
    Ok(Json(recipe))
}
