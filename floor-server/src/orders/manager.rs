//! Order lifecycle manager

use std::sync::Arc;

use chrono::Utc;
use shared::{AppError, AppResult, Order, OrderLineItem, OrderStatus};

use crate::repository::OrderRepository;
use crate::store::KvStore;

/// Processes order commands against the active collection.
///
/// Interaction-boundary validation (empty cart, no table selected) is
/// rejected here with a user-facing message; everything that passes
/// validation mutates the persisted collections.
#[derive(Clone)]
pub struct OrderManager {
    orders: OrderRepository,
}

impl OrderManager {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            orders: OrderRepository::new(store),
        }
    }

    /// Create a Preparing order from a cart
    pub fn checkout(
        &self,
        table_id: &str,
        items: Vec<OrderLineItem>,
        note: Option<String>,
    ) -> AppResult<Order> {
        if table_id.trim().is_empty() {
            return Err(AppError::validation("Select a table before placing the order"));
        }
        if items.is_empty() {
            return Err(AppError::validation("Cannot place an order with an empty cart"));
        }
        for item in &items {
            if item.price < 0.0 {
                return Err(AppError::validation(format!("Negative price for {}", item.name)));
            }
            if item.quantity < 1 {
                return Err(AppError::validation(format!("Invalid quantity for {}", item.name)));
            }
        }

        let order = Order::new(table_id, items, note);
        let mut active = self.orders.active()?;
        active.push(order.clone());
        self.orders.save_active(&active)?;

        tracing::info!(order_id = %order.id, table_id, "order placed");
        Ok(order)
    }

    /// Preparing → Delivered
    pub fn mark_delivered(&self, order_id: &str) -> AppResult<Order> {
        self.transition(order_id, OrderStatus::Delivered)
    }

    /// Settle the order: mark it Paid and move it into the history.
    ///
    /// Settling from Preparing is allowed (pay-at-counter); a settled order
    /// leaves the active collection and is never mutated again.
    pub fn settle(&self, order_id: &str) -> AppResult<Order> {
        let mut active = self.orders.active()?;
        let pos = active
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {}", order_id)))?;

        if !active[pos].status.can_transition_to(OrderStatus::Paid) {
            return Err(AppError::invalid_transition(format!(
                "Order {} cannot be settled from {:?}",
                order_id, active[pos].status
            )));
        }

        let mut order = active.remove(pos);
        order.status = OrderStatus::Paid;
        order.closed_at = Some(Utc::now().timestamp_millis());

        self.orders.commit_settlement(&active, order.clone())?;

        tracing::info!(order_id = %order.id, total = order.total(), "order settled");
        Ok(order)
    }

    /// Snapshot of the active collection
    pub fn active_orders(&self) -> AppResult<Vec<Order>> {
        self.orders.active()
    }

    /// Snapshot of the paid history
    pub fn history(&self) -> AppResult<Vec<Order>> {
        self.orders.history()
    }

    fn transition(&self, order_id: &str, next: OrderStatus) -> AppResult<Order> {
        let mut active = self.orders.active()?;
        let order = active
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {}", order_id)))?;

        if !order.status.can_transition_to(next) {
            return Err(AppError::invalid_transition(format!(
                "Order {} cannot move {:?} -> {:?}",
                order_id, order.status, next
            )));
        }

        order.status = next;
        let updated = order.clone();
        self.orders.save_active(&active)?;
        Ok(updated)
    }
}
