//! Shared types for the comanda floor service
//!
//! Data models and error types used by both the floor server and clients.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use order::{Order, OrderLineItem, OrderStatus};
pub use serde::{Deserialize, Serialize};
