//! Order types
//!
//! An order lives in the active collection while open, mutates forward
//! through [`OrderStatus`], and moves into the paid history on settlement.
//! History entries are never mutated again.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status — transitions only move forward
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Preparing,
    /// Served to the table; the legacy wire value is accepted on input
    #[serde(alias = "Entregado a la mesa")]
    Delivered,
    Paid,
}

impl OrderStatus {
    /// Forward-only transition check
    ///
    /// Settling straight from Preparing is allowed (pay-at-counter).
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Preparing, OrderStatus::Delivered)
                | (OrderStatus::Preparing, OrderStatus::Paid)
                | (OrderStatus::Delivered, OrderStatus::Paid)
        )
    }
}

/// One line of an order
///
/// Name, price and image are snapshots taken at checkout so the history
/// stays stable when the catalog changes (and so trending can render
/// without a catalog join).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl OrderLineItem {
    /// Revenue contribution of this line
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub items: Vec<OrderLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: OrderStatus,
    /// Checkout timestamp (Unix millis)
    pub opened_at: i64,
    /// Settlement timestamp (Unix millis), set when the order is paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
}

impl Order {
    /// Create a new Preparing order at the current time
    pub fn new(table_id: impl Into<String>, items: Vec<OrderLineItem>, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            table_id: table_id.into(),
            items,
            note,
            status: OrderStatus::Preparing,
            opened_at: Utc::now().timestamp_millis(),
            closed_at: None,
        }
    }

    /// Sum of price x quantity over all lines
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderLineItem::line_total).sum()
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only_transitions() {
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Delivered));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Paid));
        assert!(OrderStatus::Delivered.can_transition_to(OrderStatus::Paid));

        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Paid.can_transition_to(OrderStatus::Paid));
    }

    #[test]
    fn test_legacy_status_alias() {
        let status: OrderStatus = serde_json::from_str("\"Entregado a la mesa\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);

        // Canonical form round-trips
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"DELIVERED\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_total() {
        let order = Order::new(
            "t-1",
            vec![
                OrderLineItem {
                    product_id: "p-1".into(),
                    name: "Bandeja paisa".into(),
                    price: 10000.0,
                    quantity: 2,
                    note: None,
                    image: None,
                },
                OrderLineItem {
                    product_id: "p-2".into(),
                    name: "Limonada".into(),
                    price: 3500.0,
                    quantity: 1,
                    note: None,
                    image: None,
                },
            ],
            None,
        );
        assert_eq!(order.total(), 23500.0);
        assert_eq!(order.status, OrderStatus::Preparing);
        assert!(order.closed_at.is_none());
    }
}
