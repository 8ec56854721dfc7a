use chrono::NaiveDate;
use controlarva::core::aftersales::{AfterSalesLogic, days_since, due_sales, is_due};
use controlarva::core::customers::{CustomerLogic, CustomerPatch};
use controlarva::core::dashboard::Dashboard;
use controlarva::core::navigation::{Navigator, Tab};
use controlarva::core::sales::{SaleDraft, SalesLogic};
use controlarva::core::store::Store;
use controlarva::db::storage::{MemoryStorage, Storage};
use controlarva::errors::AppError;
use controlarva::models::{
    AfterSaleStatus, Customer, Goal, GoalMetric, Sale, SaleItem, Visit, VisitStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn items(price: f64, qty: u32) -> Vec<SaleItem> {
    vec![SaleItem {
        description: "Kit larvas".to_string(),
        quantity: qty,
        unit_price: price,
    }]
}

fn draft(id: &str, customer: Option<&str>, on: NaiveDate) -> SaleDraft {
    SaleDraft {
        id: id.to_string(),
        customer_id: customer.map(str::to_string),
        date: on,
        items: items(100.0, 2),
        notes: None,
    }
}

fn store_with_customers() -> Store<MemoryStorage> {
    let mut store = Store::load(MemoryStorage::new()).unwrap();
    store
        .set_customers(vec![
            Customer::new("c1", "Maria", "1199"),
            Customer::new("c2", "João", "1188"),
        ])
        .unwrap();
    store
}

#[test]
fn test_sale_total_is_sum_of_items() {
    let sale = Sale::new(
        "s1",
        "c1",
        date(2025, 1, 1),
        vec![
            SaleItem {
                description: "A".into(),
                quantity: 3,
                unit_price: 10.5,
            },
            SaleItem {
                description: "B".into(),
                quantity: 1,
                unit_price: 4.0,
            },
        ],
    );
    assert!((sale.total - 35.5).abs() < 1e-9);
    assert_eq!(sale.status, AfterSaleStatus::Pending);
}

#[test]
fn test_preselected_customer_fills_the_form() {
    let mut store = store_with_customers();
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("c1", None);

    let intent = nav.take_sales_intent();
    let sale = SalesLogic::create(&mut store, draft("s1", None, date(2025, 5, 1)), intent)
        .unwrap()
        .sale;
    nav.on_sale_created();

    assert_eq!(sale.customer_id, "c1");
    assert!((sale.total - 200.0).abs() < 1e-9);
    assert_eq!(store.sales().len(), 1);
    assert_eq!(nav.active(), Tab::Sales);
    assert!(nav.pending_intent().is_none());
}

#[test]
fn test_explicit_customer_wins_over_preselection() {
    let mut store = store_with_customers();
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("c1", None);

    let sale = SalesLogic::create(
        &mut store,
        draft("s1", Some("c2"), date(2025, 5, 1)),
        nav.take_sales_intent(),
    )
    .unwrap()
    .sale;
    assert_eq!(sale.customer_id, "c2");
}

#[test]
fn test_sale_needs_an_existing_customer() {
    let mut store = store_with_customers();

    let err = SalesLogic::create(&mut store, draft("s1", None, date(2025, 5, 1)), None).unwrap_err();
    assert!(matches!(err, AppError::NoCustomerSelected));

    let err = SalesLogic::create(&mut store, draft("s1", Some("zz"), date(2025, 5, 1)), None)
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "Customer", .. }));

    SalesLogic::create(&mut store, draft("s1", Some("c1"), date(2025, 5, 1)), None).unwrap();
    let err = SalesLogic::create(&mut store, draft("s1", Some("c1"), date(2025, 5, 2)), None)
        .unwrap_err();
    assert!(matches!(err, AppError::Duplicate { kind: "Sale", .. }));
}

#[test]
fn test_due_follow_up_honours_interval_and_last_contact() {
    let today = date(2025, 6, 1);
    let mut sale = Sale::new("s1", "c1", date(2025, 3, 8), items(10.0, 1));

    // 85 days exactly
    assert_eq!(days_since(&sale, today), 85);
    assert!(is_due(&sale, today, 85));
    assert!(!is_due(&sale, today, 86));

    sale.last_contact_date = Some(date(2025, 5, 20));
    assert_eq!(days_since(&sale, today), 12);
    assert!(!is_due(&sale, today, 85));

    sale.last_contact_date = None;
    sale.status = AfterSaleStatus::Renewed;
    assert!(!is_due(&sale, today, 85));
}

#[test]
fn test_due_list_is_sorted_longest_waiting_first() {
    let today = date(2025, 6, 1);
    let sales = vec![
        Sale::new("recent", "c1", date(2025, 5, 30), items(10.0, 1)),
        Sale::new("old", "c1", date(2024, 12, 1), items(10.0, 1)),
        Sale::new("older", "c2", date(2024, 6, 1), items(10.0, 1)),
    ];

    let due = due_sales(&sales, today, 85);
    let ids: Vec<&str> = due.iter().map(|d| d.sale.id.as_str()).collect();
    assert_eq!(ids, vec!["older", "old"]);
    assert_eq!(due[0].overdue_days, due[0].days_since - 85);
}

#[test]
fn test_contact_restarts_the_interval() {
    let mut store = store_with_customers();
    store
        .set_sales(vec![Sale::new("s1", "c1", date(2024, 1, 1), items(50.0, 1))])
        .unwrap();

    let today = date(2025, 6, 1);
    assert_eq!(due_sales(store.sales(), today, 85).len(), 1);

    AfterSalesLogic::mark_contacted(&mut store, "s1", today).unwrap();
    let sale = store.sale("s1").unwrap();
    assert_eq!(sale.status, AfterSaleStatus::Contacted);
    assert_eq!(sale.last_contact_date, Some(today));
    assert!(due_sales(store.sales(), today, 85).is_empty());

    assert!(matches!(
        AfterSalesLogic::mark_contacted(&mut store, "nope", today),
        Err(AppError::NotFound { kind: "Sale", .. })
    ));
}

#[test]
fn test_renew_flows_through_navigation_and_retires_old_sale() {
    let mut store = store_with_customers();
    store
        .set_sales(vec![Sale::new("s1", "c2", date(2024, 1, 1), items(50.0, 1))])
        .unwrap();

    let mut nav = Navigator::new();
    nav.select_tab(Tab::AfterSales);
    AfterSalesLogic::renew(&store, &mut nav, "s1").unwrap();

    assert_eq!(nav.active(), Tab::Sales);
    assert_eq!(nav.preselected_customer_id(), Some("c2"));
    assert_eq!(nav.replacing_sale_id(), Some("s1"));

    let intent = nav.take_sales_intent();
    let created =
        SalesLogic::create(&mut store, draft("s2", None, date(2025, 6, 1)), intent).unwrap();
    nav.on_sale_created();

    assert_eq!(created.sale.customer_id, "c2");
    assert_eq!(created.renewed.as_deref(), Some("s1"));
    assert_eq!(store.sale("s1").unwrap().status, AfterSaleStatus::Renewed);
    assert!(due_sales(store.sales(), date(2025, 6, 1), 85).is_empty());

    // the renewed sale survives a reload
    let store = Store::load(store.into_storage()).unwrap();
    assert_eq!(store.sale("s1").unwrap().status, AfterSaleStatus::Renewed);
}

#[test]
fn test_deleting_a_customer_keeps_its_sales() {
    let mut store = store_with_customers();
    SalesLogic::create(&mut store, draft("s1", Some("c1"), date(2025, 5, 1)), None).unwrap();

    CustomerLogic::delete(&mut store, "c1").unwrap();
    assert_eq!(store.sales().len(), 1);
    assert_eq!(
        CustomerLogic::display_name(store.customers(), "c1"),
        "(removed customer)"
    );
}

#[test]
fn test_customer_edit_and_search() {
    let mut store = store_with_customers();
    let updated = CustomerLogic::edit(
        &mut store,
        "c1",
        CustomerPatch {
            city: Some("Campinas".into()),
            email: Some("maria@example.com".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.city.as_deref(), Some("Campinas"));

    let found = CustomerLogic::search(store.customers(), "campinas");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "c1");

    // empty value clears an optional field
    let cleared = CustomerLogic::edit(
        &mut store,
        "c1",
        CustomerPatch {
            email: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(cleared.email, None);

    assert!(matches!(
        CustomerLogic::add(&mut store, Customer::new("c2", "Dup", "")),
        Err(AppError::Duplicate { .. })
    ));
}

#[test]
fn test_dashboard_summary() {
    let mut store = store_with_customers();
    let today = date(2025, 6, 15);
    store
        .set_sales(vec![
            Sale::new("s1", "c1", date(2025, 6, 2), items(100.0, 1)),
            Sale::new("s2", "c2", date(2025, 1, 5), items(50.0, 2)),
        ])
        .unwrap();
    store
        .set_visits(vec![Visit {
            id: "v1".into(),
            customer_id: None,
            contact_name: "Loja".into(),
            date: date(2025, 6, 20),
            time: None,
            address: None,
            notes: None,
            status: VisitStatus::Scheduled,
        }])
        .unwrap();
    store
        .set_goals(vec![
            Goal {
                id: "g1".into(),
                title: "Junho".into(),
                metric: GoalMetric::Revenue,
                target: 400.0,
                month: Some("2025-06".into()),
            },
            Goal {
                id: "g2".into(),
                title: "Vendas".into(),
                metric: GoalMetric::SalesCount,
                target: 4.0,
                month: None,
            },
        ])
        .unwrap();

    let summary = Dashboard::build(store.state(), today);
    assert_eq!(summary.customers, 2);
    assert_eq!(summary.sales, 2);
    assert_eq!(summary.scheduled_visits, 1);
    assert!((summary.revenue_total - 200.0).abs() < 1e-9);
    assert!((summary.revenue_month - 100.0).abs() < 1e-9);
    // s2 is 161 days old
    assert_eq!(summary.due_follow_ups, 1);

    assert!((summary.goals[0].achieved - 100.0).abs() < 1e-9);
    assert!((summary.goals[0].ratio - 0.25).abs() < 1e-9);
    assert!((summary.goals[1].ratio - 0.5).abs() < 1e-9);
}

#[test]
fn test_explicit_customer_does_not_retire_another_customers_sale() {
    let mut store = store_with_customers();
    store
        .set_sales(vec![Sale::new("s1", "c1", date(2024, 1, 1), items(50.0, 1))])
        .unwrap();

    let mut nav = Navigator::new();
    AfterSalesLogic::renew(&store, &mut nav, "s1").unwrap();

    let created = SalesLogic::create(
        &mut store,
        draft("s2", Some("c2"), date(2025, 6, 1)),
        nav.take_sales_intent(),
    )
    .unwrap();

    assert_eq!(created.sale.customer_id, "c2");
    assert_eq!(created.renewed, None);
    assert_eq!(store.sale("s1").unwrap().status, AfterSaleStatus::Pending);
    assert_eq!(due_sales(store.sales(), date(2025, 6, 1), 85).len(), 1);
}

#[test]
fn test_overflowing_total_is_rejected_and_store_still_loads() {
    let mut store = store_with_customers();
    SalesLogic::create(&mut store, draft("s1", Some("c1"), date(2025, 5, 1)), None).unwrap();

    let huge = SaleDraft {
        items: items(1e308, 2),
        ..draft("s2", Some("c1"), date(2025, 5, 2))
    };
    let err = SalesLogic::create(&mut store, huge, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert_eq!(store.sales().len(), 1);

    let store = Store::load(store.into_storage()).unwrap();
    assert_eq!(store.sales().len(), 1);
}

#[test]
fn test_non_finite_values_are_never_persisted() {
    let mut store = store_with_customers();
    SalesLogic::create(&mut store, draft("s1", Some("c1"), date(2025, 5, 1)), None).unwrap();
    let stored = store
        .storage()
        .get_item("controlarva_sales")
        .unwrap()
        .unwrap();

    let mut broken = Sale::new("s2", "c1", date(2025, 5, 2), items(10.0, 1));
    broken.total = f64::INFINITY;
    let err = store.update_sales(|s| s.push(broken)).unwrap_err();
    assert!(matches!(err, AppError::Serialize { ref key, .. } if key == "controlarva_sales"));

    // the medium keeps the last good document
    assert_eq!(
        store.storage().get_item("controlarva_sales").unwrap(),
        Some(stored)
    );
    let store = Store::load(store.into_storage()).unwrap();
    assert_eq!(store.sales().len(), 1);
}

#[test]
fn test_extreme_but_finite_amounts_round_trip() {
    let mut store = store_with_customers();
    SalesLogic::create(
        &mut store,
        SaleDraft {
            items: items(1e300, 3),
            ..draft("s1", Some("c1"), date(2025, 5, 1))
        },
        None,
    )
    .unwrap();

    let store = Store::load(store.into_storage()).unwrap();
    let sale = store.sale("s1").unwrap();
    assert_eq!(sale.total, 1e300 * 3.0);
}
