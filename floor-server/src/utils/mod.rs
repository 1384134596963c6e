//! Utilities

pub mod logger;
pub mod time;

pub use logger::init_logger;

// Re-export the shared result types for handler signatures
pub use shared::{AppError, AppResult};
