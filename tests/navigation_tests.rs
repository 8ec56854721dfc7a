use controlarva::core::navigation::{NewSaleIntent, Navigator, Tab};
use controlarva::errors::AppError;

#[test]
fn test_starts_on_dashboard_without_context() {
    let nav = Navigator::new();
    assert_eq!(nav.active(), Tab::Dashboard);
    assert!(nav.pending_intent().is_none());
}

#[test]
fn test_navigate_to_new_sale_preselects_customer() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", None);

    assert_eq!(nav.active(), Tab::Sales);
    assert_eq!(nav.preselected_customer_id(), Some("cust-1"));
    assert_eq!(nav.replacing_sale_id(), None);
}

#[test]
fn test_navigate_with_replacement_then_complete() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", Some("sale-42".to_string()));

    assert_eq!(nav.active(), Tab::Sales);
    assert_eq!(nav.preselected_customer_id(), Some("cust-1"));
    assert_eq!(nav.replacing_sale_id(), Some("sale-42"));

    nav.on_sale_created();
    assert_eq!(nav.preselected_customer_id(), None);
    assert_eq!(nav.replacing_sale_id(), None);
    assert_eq!(nav.active(), Tab::Sales);
}

#[test]
fn test_a_new_intent_replaces_the_old_one_entirely() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", Some("sale-42".to_string()));
    nav.navigate_to_new_sale("cust-2", None);

    assert_eq!(nav.preselected_customer_id(), Some("cust-2"));
    assert_eq!(nav.replacing_sale_id(), None);
}

#[test]
fn test_intent_is_delivered_once() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", Some("sale-42".to_string()));

    let delivered = nav.take_sales_intent();
    assert_eq!(
        delivered,
        Some(NewSaleIntent {
            customer_id: "cust-1".to_string(),
            replacing_sale_id: Some("sale-42".to_string()),
        })
    );
    assert_eq!(nav.take_sales_intent(), None);
    assert_eq!(nav.active(), Tab::Sales);
}

#[test]
fn test_leaving_sales_drops_a_pending_intent() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", None);

    nav.select_tab(Tab::Customers);
    assert!(nav.pending_intent().is_none());

    // coming back later opens a blank form
    nav.select_tab(Tab::Sales);
    assert_eq!(nav.take_sales_intent(), None);
}

#[test]
fn test_reselecting_sales_keeps_the_intent() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", None);
    nav.select_tab(Tab::Sales);

    assert_eq!(nav.preselected_customer_id(), Some("cust-1"));
}

#[test]
fn test_intent_is_not_delivered_outside_sales() {
    let mut nav = Navigator::new();
    nav.select_tab(Tab::Visits);
    assert_eq!(nav.take_sales_intent(), None);
}

#[test]
fn test_every_tab_reachable_from_every_tab() {
    let mut nav = Navigator::new();
    for from in Tab::ALL {
        for to in Tab::ALL {
            nav.select_tab(from);
            nav.select_tab(to);
            assert_eq!(nav.active(), to);
        }
    }
}

#[test]
fn test_tab_parse() {
    assert_eq!(Tab::parse("after-sales").unwrap(), Tab::AfterSales);
    assert_eq!(Tab::parse("Reports").unwrap(), Tab::Reports);
    assert_eq!(Tab::Settings.label(), "Minha Conta");
    assert!(matches!(Tab::parse("inbox"), Err(AppError::InvalidTab(_))));
}

#[test]
fn test_restored_intent_can_be_delivered_again() {
    let mut nav = Navigator::new();
    nav.navigate_to_new_sale("cust-1", Some("sale-42".to_string()));

    let intent = nav.take_sales_intent().unwrap();
    nav.restore_intent(intent.clone());
    assert_eq!(nav.take_sales_intent(), Some(intent.clone()));

    // not restored once the sales tab was left
    nav.select_tab(Tab::Reports);
    nav.restore_intent(intent);
    assert!(nav.pending_intent().is_none());
}
