//! Recipe Model

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    /// Inventory item reference
    pub ingredient_id: String,
    /// Quantity consumed per serving
    pub quantity: f64,
}

/// Recipe entity
///
/// Keyed by dish name for compatibility with the persisted catalog.
/// Dish names are assumed unique across the catalog; this is a documented
/// policy, not an enforced constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub dish_name: String,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Upsert recipe payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeUpsert {
    pub ingredients: Vec<RecipeIngredient>,
}
