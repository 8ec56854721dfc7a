use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ctl, init_logged_in, init_with_data, setup_test_db, temp_out};

#[test]
fn test_init_seeds_every_key() {
    let db_path = setup_test_db("cli_init_seeds");

    ctl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store ready"));

    ctl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("controlarva_customers"))
        .stdout(contains("controlarva_settings"))
        .stdout(contains("controlarva_auth"));
}

#[test]
fn test_content_commands_need_a_session() {
    let db_path = setup_test_db("cli_gate");

    ctl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "customer", "list"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    ctl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("logged out"));

    ctl()
        .args(["--db", &db_path, "login"])
        .assert()
        .success()
        .stdout(contains("Welcome, Vendedor Master!"));

    ctl()
        .args(["--db", &db_path, "customer", "list"])
        .assert()
        .success()
        .stdout(contains("No customers."));

    ctl()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_customers_and_sales_listing() {
    let db_path = setup_test_db("cli_customers_sales");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "customer", "list", "--search", "campinas"])
        .assert()
        .success()
        .stdout(contains("Maria Souza"))
        .stdout(contains("João Lima").not());

    ctl()
        .args(["--db", &db_path, "sale", "list"])
        .assert()
        .success()
        .stdout(contains("s1"))
        .stdout(contains("R$ 300.00"))
        .stdout(contains("R$ 99.90"))
        .stdout(contains("Total: R$ 399.90"));

    ctl()
        .args(["--db", &db_path, "sale", "show", "s1"])
        .assert()
        .success()
        .stdout(contains("Kit larvas"))
        .stdout(contains("R$ 150.00"));

    ctl()
        .args(["--db", &db_path, "sale", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("s1"))
        .stdout(contains("s2").not());
}

#[test]
fn test_sale_for_unknown_customer_fails() {
    let db_path = setup_test_db("cli_sale_unknown_customer");
    init_logged_in(&db_path);

    ctl()
        .args([
            "--db", &db_path, "sale", "add", "--customer", "nobody", "--amount", "10",
        ])
        .assert()
        .failure()
        .stderr(contains("Customer not found: nobody"));
}

#[test]
fn test_deleted_customer_renders_placeholder() {
    let db_path = setup_test_db("cli_deleted_customer");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "customer", "del", "c1", "--yes"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "sale", "list"])
        .assert()
        .success()
        .stdout(contains("(removed customer)"));
}

#[test]
fn test_aftersales_contact_and_renew() {
    let db_path = setup_test_db("cli_aftersales");
    init_with_data(&db_path);

    // s1 is old, s2 is from today
    ctl()
        .args(["--db", &db_path, "aftersales", "list"])
        .assert()
        .success()
        .stdout(contains("s1"))
        .stdout(contains("s2").not());

    ctl()
        .args(["--db", &db_path, "aftersales", "contact", "s1"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "aftersales", "list"])
        .assert()
        .success()
        .stdout(contains("No follow-ups due."));

    ctl()
        .args([
            "--db", &db_path, "aftersales", "renew", "s1", "--amount", "120",
        ])
        .assert()
        .success()
        .stdout(contains("Maria Souza"))
        .stdout(contains("Sale s1 marked as renewed."));

    ctl()
        .args(["--db", &db_path, "sale", "list", "--customer", "c1"])
        .assert()
        .success()
        .stdout(contains("renewed"))
        .stdout(contains("R$ 120.00"));
}

#[test]
fn test_settings_and_theme() {
    let db_path = setup_test_db("cli_settings");
    init_logged_in(&db_path);

    ctl()
        .args([
            "--db", &db_path, "settings", "set", "--name", "Ana", "--interval", "30",
        ])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("30 days"));

    ctl()
        .args(["--db", &db_path, "settings", "theme"])
        .assert()
        .success()
        .stdout(contains("dark"));

    ctl()
        .args(["--db", &db_path, "settings", "set", "--theme", "purple"])
        .assert()
        .failure()
        .stderr(contains("Invalid theme"));

    ctl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("dark"));
}

#[test]
fn test_visits_and_goals() {
    let db_path = setup_test_db("cli_visits_goals");
    init_with_data(&db_path);

    ctl()
        .args([
            "--db", &db_path, "visit", "add", "Loja Central", "--date", "2099-01-10", "--time",
            "14:30", "--id", "v1",
        ])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "visit", "list"])
        .assert()
        .success()
        .stdout(contains("Loja Central"))
        .stdout(contains("14:30"));

    ctl()
        .args(["--db", &db_path, "visit", "done", "v1"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "visit", "list"])
        .assert()
        .success()
        .stdout(contains("No visits."));

    ctl()
        .args([
            "--db", &db_path, "goal", "add", "Meta anual", "--metric", "sales-count", "--target",
            "4",
        ])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "goal", "list"])
        .assert()
        .success()
        .stdout(contains("Meta anual"))
        .stdout(contains("50%"));
}

#[test]
fn test_export_sales_csv_and_json() {
    let db_path = setup_test_db("cli_export_sales");
    init_with_data(&db_path);

    let csv_out = temp_out("cli_export_sales", "csv");
    ctl()
        .args([
            "--db", &db_path, "export", "sales", "--format", "csv", "--file", &csv_out,
            "--range", "2025-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.contains("2025-01-10"));
    assert!(content.contains("Maria Souza"));

    let json_out = temp_out("cli_export_customers", "json");
    ctl()
        .args([
            "--db", &db_path, "export", "customers", "--format", "json", "--file", &json_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    assert!(content.contains("João Lima"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_with_data(&db_path);

    ctl()
        .args([
            "--db", &db_path, "export", "sales", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_corrupt_key_blocks_startup_until_cleared() {
    let db_path = setup_test_db("cli_corrupt_key");
    init_with_data(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute(
            "UPDATE local_storage SET value = '{not json' WHERE key = 'controlarva_sales'",
            [],
        )
        .expect("corrupt sales");
    }

    ctl()
        .args(["--db", &db_path, "customer", "list"])
        .assert()
        .failure()
        .stderr(contains("controlarva_sales"));

    ctl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("controlarva_sales is malformed"));

    ctl()
        .args(["--db", &db_path, "db", "--clear-key", "sales", "--yes"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "sale", "list"])
        .assert()
        .success()
        .stdout(contains("No sales."));

    ctl()
        .args(["--db", &db_path, "customer", "list"])
        .assert()
        .success()
        .stdout(contains("Maria Souza"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("login"))
        .stdout(contains("Customer 'Maria Souza' added"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("cli_backup");
    init_with_data(&db_path);

    let out = temp_out("cli_backup", "sqlite");
    ctl()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    assert!(fs::metadata(&out).is_ok());
}

#[test]
fn test_replace_must_belong_to_the_same_customer() {
    let db_path = setup_test_db("cli_replace_foreign");
    init_with_data(&db_path);

    ctl()
        .args([
            "--db", &db_path, "sale", "add", "--customer", "c2", "--amount", "50", "--replace",
            "s1",
        ])
        .assert()
        .failure()
        .stderr(contains("belongs to another customer"));

    ctl()
        .args(["--db", &db_path, "aftersales", "list"])
        .assert()
        .success()
        .stdout(contains("s1"));
}

#[test]
fn test_overflowing_item_is_rejected() {
    let db_path = setup_test_db("cli_overflow_item");
    init_with_data(&db_path);

    ctl()
        .args([
            "--db", &db_path, "sale", "add", "--customer", "c1", "--item", "Kit:2:1e308",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    ctl()
        .args(["--db", &db_path, "sale", "list"])
        .assert()
        .success()
        .stdout(contains("Total: R$ 399.90"));
}
