//! Floor state derivation
//!
//! Table occupancy is a derived view, not owned state: the caller passes a
//! snapshot of the layout and the active orders and gets a fresh
//! classification back. Re-derive whenever the inputs change.

use std::collections::HashMap;

use shared::Order;
use shared::models::{DiningTable, InventoryItem, Recipe, TableState};

/// Classify every table as free / occupied / awaiting payment.
///
/// A table is occupied when any active order references it, and awaiting
/// payment when additionally its most recent order has been delivered.
/// `awaiting_payment` implies `occupied`. Inputs are not modified.
pub fn derive_occupancy(tables: &[DiningTable], active_orders: &[Order]) -> Vec<TableState> {
    // Most recent active order per table, by open time
    let mut latest: HashMap<&str, &Order> = HashMap::new();
    for order in active_orders {
        latest
            .entry(order.table_id.as_str())
            .and_modify(|current| {
                if order.opened_at >= current.opened_at {
                    *current = order;
                }
            })
            .or_insert(order);
    }

    tables
        .iter()
        .map(|table| {
            let last_order = latest.get(table.id.as_str());
            TableState {
                table: table.clone(),
                occupied: last_order.is_some(),
                awaiting_payment: last_order.is_some_and(|o| o.is_delivered()),
            }
        })
        .collect()
}

/// Whether a dish can currently be made from stock on hand.
///
/// Fail-open policy: a dish with no recipe on file is always available —
/// unknown dishes stay orderable. Otherwise every required ingredient's
/// on-hand quantity must cover the recipe quantity (an ingredient missing
/// from inventory counts as zero on hand).
pub fn is_dish_available(dish_name: &str, recipes: &[Recipe], inventory: &[InventoryItem]) -> bool {
    let Some(recipe) = recipes.iter().find(|r| r.dish_name == dish_name) else {
        return true;
    };

    let on_hand: HashMap<&str, f64> = inventory
        .iter()
        .map(|i| (i.id.as_str(), i.quantity_on_hand))
        .collect();

    recipe
        .ingredients
        .iter()
        .all(|ing| on_hand.get(ing.ingredient_id.as_str()).copied().unwrap_or(0.0) >= ing.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RecipeIngredient, TableShape};
    use shared::{OrderLineItem, OrderStatus};

    fn table(id: &str) -> DiningTable {
        DiningTable {
            id: id.to_string(),
            name: format!("Table {}", id),
            x: 0.0,
            y: 0.0,
            shape: TableShape::Square,
            capacity: 4,
        }
    }

    fn active_order(table_id: &str, status: OrderStatus, opened_at: i64) -> Order {
        let mut order = Order::new(
            table_id,
            vec![OrderLineItem {
                product_id: "p-1".into(),
                name: "Ajiaco".into(),
                price: 10000.0,
                quantity: 1,
                note: None,
                image: None,
            }],
            None,
        );
        order.status = status;
        order.opened_at = opened_at;
        order
    }

    #[test]
    fn test_unreferenced_table_is_free() {
        let tables = vec![table("1"), table("2")];
        let orders = vec![active_order("1", OrderStatus::Preparing, 100)];

        let states = derive_occupancy(&tables, &orders);
        assert!(states[0].occupied);
        assert!(!states[0].awaiting_payment);
        assert!(!states[1].occupied);
        assert!(!states[1].awaiting_payment);
    }

    #[test]
    fn test_delivered_order_awaits_payment() {
        let tables = vec![table("3"), table("4")];
        let orders = vec![active_order("4", OrderStatus::Delivered, 100)];

        let states = derive_occupancy(&tables, &orders);
        let t4 = states.iter().find(|s| s.table.id == "4").unwrap();
        assert!(t4.occupied);
        assert!(t4.awaiting_payment);

        let t3 = states.iter().find(|s| s.table.id == "3").unwrap();
        assert!(!t3.occupied);
        assert!(!t3.awaiting_payment);
    }

    #[test]
    fn test_awaiting_payment_follows_most_recent_order() {
        let tables = vec![table("1")];
        // Older delivered order, newer still preparing: not awaiting payment
        let orders = vec![
            active_order("1", OrderStatus::Delivered, 100),
            active_order("1", OrderStatus::Preparing, 200),
        ];

        let states = derive_occupancy(&tables, &orders);
        assert!(states[0].occupied);
        assert!(!states[0].awaiting_payment);
    }

    #[test]
    fn test_inputs_unmodified() {
        let tables = vec![table("1")];
        let orders = vec![active_order("1", OrderStatus::Delivered, 100)];
        let tables_before = serde_json::to_string(&tables).unwrap();

        let _ = derive_occupancy(&tables, &orders);
        assert_eq!(serde_json::to_string(&tables).unwrap(), tables_before);
    }

    #[test]
    fn test_unknown_dish_is_always_available() {
        let inventory = vec![];
        assert!(is_dish_available("Plato misterioso", &[], &inventory));
    }

    #[test]
    fn test_availability_against_stock() {
        let recipes = vec![Recipe {
            dish_name: "Ajiaco".into(),
            ingredients: vec![RecipeIngredient { ingredient_id: "i-1".into(), quantity: 2.0 }],
        }];
        let mut inventory = vec![InventoryItem {
            id: "i-1".into(),
            name: "Potato".into(),
            quantity_on_hand: 2.0,
            unit: "kg".into(),
            unit_cost: None,
        }];

        assert!(is_dish_available("Ajiaco", &recipes, &inventory));

        inventory[0].quantity_on_hand = 1.5;
        assert!(!is_dish_available("Ajiaco", &recipes, &inventory));
    }

    #[test]
    fn test_missing_ingredient_blocks_dish() {
        let recipes = vec![Recipe {
            dish_name: "Ajiaco".into(),
            ingredients: vec![RecipeIngredient { ingredient_id: "i-9".into(), quantity: 1.0 }],
        }];
        assert!(!is_dish_available("Ajiaco", &recipes, &[]));
    }
}
