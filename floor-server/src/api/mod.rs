//! API route modules
//!
//! One module per domain, each exposing a `router()` nested under its
//! `/api/...` prefix:
//!
//! - [`health`] - liveness check
//! - [`menu`] - catalog browsing and dish availability
//! - [`statistics`] - daily breakdown and trending dishes
//! - [`tables`] - table layout and derived occupancy
//! - [`orders`] - order lifecycle
//! - [`inventory`] - stock and unit costs
//! - [`recipes`] - recipe book

pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod recipes;
pub mod statistics;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
