//! Catalog repository — products and recipes

use std::sync::Arc;

use shared::{AppError, AppResult};
use shared::models::{Product, ProductCreate, ProductUpdate, Recipe, RecipeUpsert};
use uuid::Uuid;

use crate::store::{KvStore, keys, load_collection, save_collection};

/// Repository for the menu catalog (products) and the recipe book
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn KvStore>,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    // ==================== Products ====================

    pub fn products(&self) -> AppResult<Vec<Product>> {
        Ok(load_collection(self.store.as_ref(), keys::PRODUCTS)?)
    }

    /// Create a product. Dish names must be unique across the catalog:
    /// recipes and availability checks key on them.
    pub fn create_product(&self, payload: ProductCreate) -> AppResult<Product> {
        let mut products = self.products()?;
        if products.iter().any(|p| p.name == payload.name) {
            return Err(AppError::already_exists(format!("Dish {}", payload.name)));
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            price: payload.price,
            category: payload.category,
            image: payload.image,
        };
        products.push(product.clone());
        save_collection(self.store.as_ref(), keys::PRODUCTS, &products)?;
        Ok(product)
    }

    pub fn update_product(&self, id: &str, payload: ProductUpdate) -> AppResult<Product> {
        let mut products = self.products()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;

        if let Some(name) = payload.name {
            product.name = name;
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(category) = payload.category {
            product.category = category;
        }
        if let Some(image) = payload.image {
            product.image = Some(image);
        }

        let updated = product.clone();
        save_collection(self.store.as_ref(), keys::PRODUCTS, &products)?;
        Ok(updated)
    }

    // ==================== Recipes ====================

    pub fn recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(load_collection(self.store.as_ref(), keys::RECIPES)?)
    }

    /// Create or replace the recipe for a dish
    pub fn upsert_recipe(&self, dish_name: &str, payload: RecipeUpsert) -> AppResult<Recipe> {
        let mut recipes = self.recipes()?;
        let recipe = Recipe {
            dish_name: dish_name.to_string(),
            ingredients: payload.ingredients,
        };
        match recipes.iter_mut().find(|r| r.dish_name == dish_name) {
            Some(existing) => *existing = recipe.clone(),
            None => recipes.push(recipe.clone()),
        }
        save_collection(self.store.as_ref(), keys::RECIPES, &recipes)?;
        Ok(recipe)
    }
}
