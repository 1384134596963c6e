//! Collection repositories
//!
//! Typed access to the JSON collections held by the key-value store.
//! Each repository loads a full collection snapshot, mutates it in memory
//! and writes it back — last write wins, which matches single-operator
//! floor use.

pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod tables;

pub use catalog::CatalogRepository;
pub use inventory::InventoryRepository;
pub use orders::OrderRepository;
pub use tables::TableRepository;

use shared::AppError;

use crate::store::StorageError;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::storage(err.to_string())
    }
}
