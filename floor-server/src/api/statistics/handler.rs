//! Statistics API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{DailySales, TrendingDish};

use crate::core::ServerState;
use crate::repository::{CatalogRepository, InventoryRepository, OrderRepository};
use crate::stats;
use crate::utils::AppResult;
use crate::utils::time;

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub top: Option<usize>,
}

/// GET /api/statistics/daily - per-day revenue/cost/profit over the history
///
/// Optional `startDate`/`endDate` (YYYY-MM-DD, inclusive) restrict the
/// range, interpreted in the business timezone.
pub async fn daily(
    State(state): State<ServerState>,
    Query(query): Query<DailyQuery>,
) -> AppResult<Json<Vec<DailySales>>> {
    let tz = state.config.timezone;
    let start = query.start_date.as_deref().map(time::parse_date).transpose()?;
    let end = query.end_date.as_deref().map(time::parse_date).transpose()?;

    let mut history = OrderRepository::new(state.store.clone()).history()?;
    if start.is_some() || end.is_some() {
        history.retain(|o| {
            let date = time::business_date(o.closed_at.unwrap_or(o.opened_at), tz);
            start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
        });
    }

    let catalog = CatalogRepository::new(state.store.clone());
    let recipes = catalog.recipes()?;
    let inventory = InventoryRepository::new(state.store.clone()).list()?;

    tracing::debug!(orders = history.len(), "computing daily breakdown");

    let days = stats::daily_breakdown(&history, &recipes, &inventory, tz);
    Ok(Json(days))
}

/// GET /api/statistics/trending?top=N - most-ordered dishes
pub async fn trending(
    State(state): State<ServerState>,
    Query(query): Query<TrendingQuery>,
) -> AppResult<Json<Vec<TrendingDish>>> {
    let history = OrderRepository::new(state.store.clone()).history()?;
    let top_n = query.top.unwrap_or(stats::DEFAULT_TOP_N);
    Ok(Json(stats::trending(&history, top_n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::store::{MemoryStore, keys, save_collection};
    use shared::{Order, OrderLineItem, OrderStatus};
    use std::sync::Arc;

    // 2024-01-01T12:00:00Z and one day later
    const JAN_1: i64 = 1_704_110_400_000;
    const JAN_2: i64 = JAN_1 + 86_400_000;

    fn paid_order(closed_at: i64, price: f64) -> Order {
        let mut order = Order::new(
            "4",
            vec![OrderLineItem {
                product_id: "p-1".into(),
                name: "Ajiaco".into(),
                price,
                quantity: 1,
                note: None,
                image: None,
            }],
            None,
        );
        order.status = OrderStatus::Paid;
        order.closed_at = Some(closed_at);
        order
    }

    fn state_with_history(orders: &[Order]) -> ServerState {
        let store = Arc::new(MemoryStore::new());
        save_collection(store.as_ref(), keys::ORDER_HISTORY, orders).unwrap();
        let mut config = Config::from_env();
        config.timezone = chrono_tz::UTC;
        ServerState::new(config, store)
    }

    #[tokio::test]
    async fn test_daily_without_range_covers_everything() {
        let state = state_with_history(&[paid_order(JAN_1, 100.0), paid_order(JAN_2, 200.0)]);

        let Json(days) = daily(
            State(state),
            Query(DailyQuery { start_date: None, end_date: None }),
        )
        .await
        .unwrap();

        assert_eq!(days.len(), 2);
    }

    #[tokio::test]
    async fn test_daily_filters_by_date_range() {
        let state = state_with_history(&[paid_order(JAN_1, 100.0), paid_order(JAN_2, 200.0)]);

        let Json(days) = daily(
            State(state),
            Query(DailyQuery {
                start_date: Some("2024-01-02".into()),
                end_date: Some("2024-01-02".into()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2024-01-02");
        assert_eq!(days[0].revenue, 200.0);
    }

    #[tokio::test]
    async fn test_daily_rejects_malformed_date() {
        let state = state_with_history(&[]);

        let result = daily(
            State(state),
            Query(DailyQuery { start_date: Some("02/01/2024".into()), end_date: None }),
        )
        .await;

        assert!(result.is_err());
    }
}
