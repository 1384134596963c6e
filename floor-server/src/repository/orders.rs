//! Order repository — active collection + paid history

use std::sync::Arc;

use shared::{AppResult, Order};

use crate::store::{KvStore, StorageError, keys, load_collection, save_collection};

/// Repository for the active-orders collection and the paid history
#[derive(Clone)]
pub struct OrderRepository {
    store: Arc<dyn KvStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Snapshot of all active (unpaid) orders
    pub fn active(&self) -> AppResult<Vec<Order>> {
        Ok(load_collection(self.store.as_ref(), keys::ACTIVE_ORDERS)?)
    }

    /// Snapshot of the paid-order history
    pub fn history(&self) -> AppResult<Vec<Order>> {
        Ok(load_collection(self.store.as_ref(), keys::ORDER_HISTORY)?)
    }

    /// Replace the active-orders collection
    pub fn save_active(&self, orders: &[Order]) -> AppResult<()> {
        Ok(save_collection(self.store.as_ref(), keys::ACTIVE_ORDERS, orders)?)
    }

    /// Move a settled order out of the active collection into the history.
    ///
    /// Both collections are written in a single commit, so a storage
    /// failure (or power loss) leaves the order active and settleable
    /// again — it can never exist in neither collection.
    pub fn commit_settlement(&self, active: &[Order], settled: Order) -> AppResult<()> {
        let mut history = self.history()?;
        history.push(settled);

        let active_raw = serde_json::to_string(active).map_err(StorageError::from)?;
        let history_raw = serde_json::to_string(&history).map_err(StorageError::from)?;
        self.store.put_many(&[
            (keys::ACTIVE_ORDERS, active_raw.as_str()),
            (keys::ORDER_HISTORY, history_raw.as_str()),
        ])?;
        Ok(())
    }
}
