//! Dining table repository — persisted layout data

use std::sync::Arc;

use shared::{AppError, AppResult};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, PositionUpdate};
use uuid::Uuid;

use crate::store::{KvStore, keys, load_collection, save_collection};

/// Repository for the table-layout collection
#[derive(Clone)]
pub struct TableRepository {
    store: Arc<dyn KvStore>,
}

impl TableRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<DiningTable>> {
        Ok(load_collection(self.store.as_ref(), keys::TABLES)?)
    }

    pub fn create(&self, payload: DiningTableCreate) -> AppResult<DiningTable> {
        let table = DiningTable {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            x: payload.x.unwrap_or(0.0),
            y: payload.y.unwrap_or(0.0),
            shape: payload.shape.unwrap_or_default(),
            capacity: payload.capacity.unwrap_or(4),
        };
        let mut tables = self.list()?;
        tables.push(table.clone());
        save_collection(self.store.as_ref(), keys::TABLES, &tables)?;
        Ok(table)
    }

    pub fn update(&self, id: &str, payload: DiningTableUpdate) -> AppResult<DiningTable> {
        let mut tables = self.list()?;
        let table = tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Table {}", id)))?;

        if let Some(name) = payload.name {
            table.name = name;
        }
        if let Some(shape) = payload.shape {
            table.shape = shape;
        }
        if let Some(capacity) = payload.capacity {
            table.capacity = capacity;
        }

        let updated = table.clone();
        save_collection(self.store.as_ref(), keys::TABLES, &tables)?;
        Ok(updated)
    }

    /// Apply a drag event: direct field replacement, no validation
    pub fn update_position(&self, id: &str, payload: PositionUpdate) -> AppResult<DiningTable> {
        let mut tables = self.list()?;
        let table = tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Table {}", id)))?;

        table.x = payload.x;
        table.y = payload.y;

        let updated = table.clone();
        save_collection(self.store.as_ref(), keys::TABLES, &tables)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.list()?;
        let before = tables.len();
        tables.retain(|t| t.id != id);
        if tables.len() == before {
            return Ok(false);
        }
        save_collection(self.store.as_ref(), keys::TABLES, &tables)?;
        Ok(true)
    }
}
