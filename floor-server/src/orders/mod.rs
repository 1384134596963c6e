//! Order lifecycle
//!
//! checkout → deliver → settle. Settlement moves the order out of the
//! active collection into the paid history in the same operation; history
//! entries are never touched again.

pub mod manager;

pub use manager::OrderManager;
