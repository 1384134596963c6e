//! Data models
//!
//! Shared between floor-server and frontend (via API).

pub mod dining_table;
pub mod inventory;
pub mod product;
pub mod recipe;
pub mod stats;

// Re-exports
pub use dining_table::*;
pub use inventory::*;
pub use product::*;
pub use recipe::*;
pub use stats::*;
