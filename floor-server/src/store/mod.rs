//! Key-value persistence
//!
//! The persistence collaborator is a string key-value store holding
//! JSON-encoded collections (active orders, paid history, inventory,
//! recipes, products, table layout). [`RedbStore`] is the on-disk
//! implementation; [`MemoryStore`] backs tests.
//!
//! Missing or malformed collection data degrades to an empty collection
//! with a warning — the system renders zero-state views rather than
//! failing (see [`load_collection`]).

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Collection keys
pub mod keys {
    pub const ACTIVE_ORDERS: &str = "active_orders";
    pub const ORDER_HISTORY: &str = "order_history";
    pub const PRODUCTS: &str = "products";
    pub const RECIPES: &str = "recipes";
    pub const INVENTORY: &str = "inventory";
    pub const TABLES: &str = "tables";
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store: the only surface the core requires of its
/// persistence collaborator.
pub trait KvStore: Send + Sync {
    /// Read the value at `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` at `key`, replacing any previous value
    fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Write several keys in one durable commit.
    ///
    /// Either every entry lands or none does — settlement relies on this
    /// to move an order between collections without a window where it
    /// exists in neither.
    fn put_many(&self, entries: &[(&str, &str)]) -> StorageResult<()>;
}

/// Load a JSON collection from the store.
///
/// A missing key or malformed payload yields an empty collection, never an
/// error; only an actual storage failure propagates.
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> StorageResult<Vec<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed collection, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize and write a JSON collection
pub fn save_collection<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    items: &[T],
) -> StorageResult<()> {
    let raw = serde_json::to_string(items)?;
    store.put(key, &raw)
}
