//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table shape (layout rendering hint)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableShape {
    #[default]
    Square,
    Round,
    Rectangle,
}

/// Dining table entity
///
/// Position is persisted layout data; occupancy is never stored — it is
/// derived from the active-orders collection (see [`TableState`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub shape: TableShape,
    pub capacity: i32,
}

/// Derived occupancy view of a table
///
/// `awaiting_payment` implies `occupied`; a table referenced by no active
/// order has both flags false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableState {
    #[serde(flatten)]
    pub table: DiningTable,
    pub occupied: bool,
    pub awaiting_payment: bool,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub shape: Option<TableShape>,
    pub capacity: Option<i32>,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub shape: Option<TableShape>,
    pub capacity: Option<i32>,
}

/// Position update payload (drag-and-drop layout editor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub x: f64,
    pub y: f64,
}
