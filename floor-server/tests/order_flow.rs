//! End-to-end order flow: checkout → deliver → settle → dashboards

use std::sync::Arc;

use floor_server::floor::derive_occupancy;
use floor_server::orders::OrderManager;
use floor_server::repository::{CatalogRepository, InventoryRepository, TableRepository};
use floor_server::stats;
use floor_server::store::{KvStore, MemoryStore, RedbStore};
use shared::models::{DiningTableCreate, InventoryItemUpdate, RecipeIngredient, RecipeUpsert};
use shared::{OrderLineItem, OrderStatus};

fn line(product_id: &str, name: &str, price: f64, quantity: i64) -> OrderLineItem {
    OrderLineItem {
        product_id: product_id.to_string(),
        name: name.to_string(),
        price,
        quantity,
        note: None,
        image: None,
    }
}

fn seed_cost_model(store: &Arc<dyn KvStore>) {
    let catalog = CatalogRepository::new(store.clone());
    catalog
        .upsert_recipe(
            "Ajiaco",
            RecipeUpsert {
                ingredients: vec![RecipeIngredient {
                    ingredient_id: "potato".into(),
                    quantity: 1.0,
                }],
            },
        )
        .unwrap();

    let inventory = InventoryRepository::new(store.clone());
    inventory
        .upsert(
            "potato",
            InventoryItemUpdate {
                name: Some("Potato".into()),
                quantity_on_hand: Some(50.0),
                unit: Some("kg".into()),
                unit_cost: Some(3000.0),
            },
        )
        .unwrap();
}

#[test]
fn full_floor_flow() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    seed_cost_model(&store);

    let tables = TableRepository::new(store.clone());
    let t4 = tables
        .create(DiningTableCreate {
            name: "4".into(),
            x: Some(120.0),
            y: Some(80.0),
            shape: None,
            capacity: Some(4),
        })
        .unwrap();
    let t5 = tables
        .create(DiningTableCreate {
            name: "5".into(),
            x: None,
            y: None,
            shape: None,
            capacity: None,
        })
        .unwrap();

    let manager = OrderManager::new(store.clone());
    let order = manager
        .checkout(&t4.id, vec![line("p-1", "Ajiaco", 10000.0, 2)], None)
        .unwrap();

    // Occupied but not yet awaiting payment
    let layout = tables.list().unwrap();
    let states = derive_occupancy(&layout, &manager.active_orders().unwrap());
    let s4 = states.iter().find(|s| s.table.id == t4.id).unwrap();
    assert!(s4.occupied && !s4.awaiting_payment);

    // Delivered → awaiting payment; the other table stays free
    manager.mark_delivered(&order.id).unwrap();
    let states = derive_occupancy(&layout, &manager.active_orders().unwrap());
    let s4 = states.iter().find(|s| s.table.id == t4.id).unwrap();
    let s5 = states.iter().find(|s| s.table.id == t5.id).unwrap();
    assert!(s4.occupied && s4.awaiting_payment);
    assert!(!s5.occupied && !s5.awaiting_payment);

    // Settle: table frees up, history gains the order
    let settled = manager.settle(&order.id).unwrap();
    assert_eq!(settled.status, OrderStatus::Paid);
    let states = derive_occupancy(&layout, &manager.active_orders().unwrap());
    assert!(states.iter().all(|s| !s.occupied));

    // Dashboard: revenue 20000, cost 6000 (2 servings x 1kg x 3000), profit 14000
    let history = manager.history().unwrap();
    let catalog = CatalogRepository::new(store.clone());
    let days = stats::daily_breakdown(
        &history,
        &catalog.recipes().unwrap(),
        &InventoryRepository::new(store.clone()).list().unwrap(),
        chrono_tz::UTC,
    );
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].revenue, 20000.0);
    assert_eq!(days[0].cost, 6000.0);
    assert_eq!(days[0].profit, 14000.0);

    let top = stats::trending(&history, 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].product_id, "p-1");
    assert_eq!(top[0].order_count, 2);
}

#[test]
fn legacy_active_orders_payload_still_drives_occupancy() {
    // Data written by the previous implementation used the Spanish status
    // string; it must still classify as awaiting payment.
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    store
        .put(
            "active_orders",
            r#"[{
                "id": "legacy-1",
                "table_id": "4",
                "items": [{"product_id": "p-1", "name": "Ajiaco", "price": 10000.0, "quantity": 1}],
                "status": "Entregado a la mesa",
                "opened_at": 1704110400000
            }]"#,
        )
        .unwrap();

    let tables = TableRepository::new(store.clone());
    tables
        .create(DiningTableCreate {
            name: "4".into(),
            x: None,
            y: None,
            shape: None,
            capacity: None,
        })
        .unwrap();

    let manager = OrderManager::new(store.clone());
    let active = manager.active_orders().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].status, OrderStatus::Delivered);

    // Table "4" should read occupied and awaiting payment. Our table ids
    // are generated, so match by the order's table reference directly.
    let mut layout = tables.list().unwrap();
    layout[0].id = "4".into();
    let states = derive_occupancy(&layout, &active);
    assert!(states[0].occupied && states[0].awaiting_payment);
}

#[test]
fn flow_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floor.redb");

    let order_id = {
        let store: Arc<dyn KvStore> = Arc::new(RedbStore::open(&path).unwrap());
        let manager = OrderManager::new(store);
        let order = manager
            .checkout("t-1", vec![line("p-1", "Lechona", 8000.0, 1)], None)
            .unwrap();
        order.id
    };

    let store: Arc<dyn KvStore> = Arc::new(RedbStore::open(&path).unwrap());
    let manager = OrderManager::new(store);
    let active = manager.active_orders().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, order_id);

    manager.settle(&order_id).unwrap();
    assert!(manager.active_orders().unwrap().is_empty());
    assert_eq!(manager.history().unwrap().len(), 1);
}
