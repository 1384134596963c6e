//! Floor server — order, table and inventory service for a restaurant floor
//!
//! # Modules
//!
//! - **core**: configuration, shared state, HTTP server assembly
//! - **store**: key-value persistence (redb) with JSON collection codec
//! - **repository**: typed collection repositories over the store
//! - **orders**: order lifecycle manager (checkout → deliver → settle)
//! - **stats**: daily revenue/cost/profit breakdown and trending dishes
//! - **floor**: table occupancy derivation and dish availability
//! - **api**: axum handlers
//! - **client**: account service HTTP client

pub mod api;
pub mod client;
pub mod core;
pub mod floor;
pub mod orders;
pub mod repository;
pub mod stats;
pub mod store;
pub mod utils;

// Re-exports
pub use crate::core::{Config, ServerState};
pub use orders::OrderManager;
pub use store::{KvStore, MemoryStore, RedbStore};
