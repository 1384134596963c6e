//! Inventory repository

use std::sync::Arc;

use shared::{AppError, AppResult};
use shared::models::{InventoryItem, InventoryItemUpdate};

use crate::store::{KvStore, keys, load_collection, save_collection};

/// Repository for the inventory collection
#[derive(Clone)]
pub struct InventoryRepository {
    store: Arc<dyn KvStore>,
}

impl InventoryRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<InventoryItem>> {
        Ok(load_collection(self.store.as_ref(), keys::INVENTORY)?)
    }

    /// Create or replace an item under a caller-supplied id
    pub fn upsert(&self, id: &str, payload: InventoryItemUpdate) -> AppResult<InventoryItem> {
        let mut items = self.list()?;
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                if let Some(name) = payload.name {
                    item.name = name;
                }
                if let Some(qty) = payload.quantity_on_hand {
                    item.quantity_on_hand = qty;
                }
                if let Some(unit) = payload.unit {
                    item.unit = unit;
                }
                if let Some(cost) = payload.unit_cost {
                    item.unit_cost = Some(cost);
                }
                let updated = item.clone();
                save_collection(self.store.as_ref(), keys::INVENTORY, &items)?;
                Ok(updated)
            }
            None => {
                let item = InventoryItem {
                    id: id.to_string(),
                    name: payload
                        .name
                        .ok_or_else(|| AppError::validation("New inventory item needs a name"))?,
                    quantity_on_hand: payload.quantity_on_hand.unwrap_or(0.0),
                    unit: payload.unit.unwrap_or_else(|| "unit".to_string()),
                    unit_cost: payload.unit_cost,
                };
                items.push(item.clone());
                save_collection(self.store.as_ref(), keys::INVENTORY, &items)?;
                Ok(item)
            }
        }
    }
}
