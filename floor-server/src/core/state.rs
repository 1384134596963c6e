//! Shared server state

use std::sync::Arc;

use crate::store::KvStore;

use super::Config;

/// State shared across all HTTP handlers
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn KvStore>,
}

impl ServerState {
    pub fn new(config: Config, store: Arc<dyn KvStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
