mod common;
use common::setup_test_db;

use controlarva::core::session::SessionGate;
use controlarva::core::store::Store;
use controlarva::db::migrate::{applied_migrations, run_pending_migrations};
use controlarva::db::storage::{SqliteStorage, Storage};
use controlarva::models::Customer;

#[test]
fn test_items_overwrite_and_remove() {
    let mut storage = SqliteStorage::in_memory().expect("open in-memory db");

    assert_eq!(storage.get_item("controlarva_sales").unwrap(), None);

    storage.set_item("controlarva_sales", "[]").unwrap();
    storage
        .set_item("controlarva_sales", "[{\"id\":\"s1\"}]")
        .unwrap();
    assert_eq!(
        storage.get_item("controlarva_sales").unwrap().as_deref(),
        Some("[{\"id\":\"s1\"}]")
    );

    storage.set_item("controlarva_auth", "true").unwrap();
    assert_eq!(
        storage.keys().unwrap(),
        vec!["controlarva_auth".to_string(), "controlarva_sales".to_string()]
    );

    storage.remove_item("controlarva_sales").unwrap();
    assert_eq!(storage.get_item("controlarva_sales").unwrap(), None);
}

#[test]
fn test_migrations_are_recorded_once() {
    let storage = SqliteStorage::in_memory().unwrap();
    let first = applied_migrations(storage.conn()).unwrap();
    assert_eq!(first.len(), 2);

    run_pending_migrations(storage.conn()).unwrap();
    assert_eq!(applied_migrations(storage.conn()).unwrap(), first);
}

#[test]
fn test_store_persists_across_processes() {
    let db_path = setup_test_db("store_persists_across_processes");

    {
        let storage = SqliteStorage::open(&db_path).unwrap();
        let mut store = Store::load(storage).unwrap();
        store
            .update_customers(|c| c.push(Customer::new("c1", "Maria", "1199")))
            .unwrap();
        SessionGate::login(&mut store).unwrap();
    }

    let store = Store::load(SqliteStorage::open(&db_path).unwrap()).unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.customers().len(), 1);
    assert_eq!(store.customer("c1").map(|c| c.name.as_str()), Some("Maria"));
}

#[test]
fn test_failed_sale_keeps_the_pending_intent() {
    use chrono::NaiveDate;
    use controlarva::cli::commands::sale::record;
    use controlarva::core::navigation::Navigator;
    use controlarva::core::sales::SaleDraft;
    use controlarva::models::SaleItem;

    let mut store = Store::load(SqliteStorage::in_memory().unwrap()).unwrap();
    store
        .update_customers(|c| c.push(Customer::new("c1", "Maria", "1199")))
        .unwrap();

    let draft = |id: &str| SaleDraft {
        id: id.to_string(),
        customer_id: None,
        date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        items: vec![SaleItem {
            description: "Kit".to_string(),
            quantity: 1,
            unit_price: 10.0,
        }],
        notes: None,
    };

    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("c1", None);
    record(&mut store, &mut nav, draft("s1")).unwrap();

    // same id again: rejected, the form keeps its customer
    nav.navigate_to_new_sale("c1", None);
    assert!(record(&mut store, &mut nav, draft("s1")).is_err());
    assert_eq!(nav.preselected_customer_id(), Some("c1"));

    let created = record(&mut store, &mut nav, draft("s2")).unwrap();
    assert_eq!(created.sale.customer_id, "c1");
    assert!(nav.pending_intent().is_none());
}
