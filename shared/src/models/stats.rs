//! Statistics Models

use serde::{Deserialize, Serialize};

/// Per-day revenue/cost/profit breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    /// Business date (YYYY-MM-DD)
    pub date: String,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

/// Trending dish entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingDish {
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Total quantity ordered across the history
    pub order_count: i64,
}
