//! Sales statistics
//!
//! Pure aggregation over a paid-order history snapshot. The history is the
//! source for every dashboard; nothing here mutates its inputs or touches
//! the store.

use std::collections::HashMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::Order;
use shared::models::{DailySales, InventoryItem, Recipe, TrendingDish};

use crate::utils::time::business_date;

/// Default number of trending entries
pub const DEFAULT_TOP_N: usize = 5;

/// Cost of one serving of a dish.
///
/// Fail-zero policy: a dish without a recipe, or an ingredient without a
/// recorded unit cost, contributes 0 — silent under-costing is the
/// documented behavior, never an error.
fn dish_unit_cost(
    dish_name: &str,
    recipes: &HashMap<&str, &Recipe>,
    unit_costs: &HashMap<&str, f64>,
) -> f64 {
    let Some(recipe) = recipes.get(dish_name) else {
        return 0.0;
    };
    recipe
        .ingredients
        .iter()
        .map(|ing| ing.quantity * unit_costs.get(ing.ingredient_id.as_str()).copied().unwrap_or(0.0))
        .sum()
}

/// Per-day revenue, cost and profit over the paid-order history.
///
/// Orders group by the calendar date of their settlement timestamp in the
/// business timezone. Output is sorted ascending by date.
pub fn daily_breakdown(
    history: &[Order],
    recipes: &[Recipe],
    inventory: &[InventoryItem],
    tz: Tz,
) -> Vec<DailySales> {
    let recipe_map: HashMap<&str, &Recipe> =
        recipes.iter().map(|r| (r.dish_name.as_str(), r)).collect();
    let unit_costs: HashMap<&str, f64> = inventory
        .iter()
        .map(|i| (i.id.as_str(), i.unit_cost_or_zero()))
        .collect();

    // BTreeMap keeps dates ascending
    let mut days: std::collections::BTreeMap<NaiveDate, (f64, f64)> = Default::default();

    for order in history {
        let date = business_date(order.closed_at.unwrap_or(order.opened_at), tz);
        let entry = days.entry(date).or_insert((0.0, 0.0));
        for item in &order.items {
            entry.0 += item.line_total();
            entry.1 += item.quantity as f64 * dish_unit_cost(&item.name, &recipe_map, &unit_costs);
        }
    }

    days.into_iter()
        .map(|(date, (revenue, cost))| DailySales {
            date: date.format("%Y-%m-%d").to_string(),
            revenue,
            cost,
            profit: revenue - cost,
        })
        .collect()
}

/// Most-ordered dishes across the history.
///
/// Line items group by product id; counts are summed quantities. Sort is
/// descending by count and stable, so ties keep first-appearance order.
/// Never returns more than `top_n` entries.
pub fn trending(history: &[Order], top_n: usize) -> Vec<TrendingDish> {
    let mut by_product: Vec<TrendingDish> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in history {
        for item in &order.items {
            match index.get(&item.product_id) {
                Some(&i) => by_product[i].order_count += item.quantity,
                None => {
                    index.insert(item.product_id.clone(), by_product.len());
                    by_product.push(TrendingDish {
                        product_id: item.product_id.clone(),
                        name: item.name.clone(),
                        image: item.image.clone(),
                        order_count: item.quantity,
                    });
                }
            }
        }
    }

    by_product.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    by_product.truncate(top_n);
    by_product
}
