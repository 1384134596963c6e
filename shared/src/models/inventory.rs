//! Inventory Model

use serde::{Deserialize, Serialize};

/// Inventory item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Stock on hand, in `unit`
    pub quantity_on_hand: f64,
    /// Unit of measure (kg, l, unit, ...)
    pub unit: String,
    /// Cost per unit. Absent means unknown; costing treats it as 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
}

impl InventoryItem {
    /// Unit cost with the fail-zero default applied
    pub fn unit_cost_or_zero(&self) -> f64 {
        self.unit_cost.unwrap_or(0.0)
    }
}

/// Update inventory item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub quantity_on_hand: Option<f64>,
    pub unit: Option<String>,
    pub unit_cost: Option<f64>,
}
