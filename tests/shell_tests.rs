use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ctl, init_with_data, setup_test_db};

#[test]
fn test_shell_is_gated_until_login() {
    let db_path = setup_test_db("shell_gate");
    ctl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ctl()
        .args(["--db", &db_path, "shell"])
        .write_stdin("tab customers\nlogin\ntab customers\nquit\n")
        .assert()
        .success()
        .stderr(contains("Not logged in"))
        .stdout(contains("Welcome, Vendedor Master!"))
        .stdout(contains("Meus Clientes"));
}

#[test]
fn test_shell_new_sale_uses_preselected_customer() {
    let db_path = setup_test_db("shell_new_sale");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "shell"])
        .write_stdin("new-sale c2\nsell 45 Kit teste\nsell 10\nquit\n")
        .assert()
        .success()
        .stdout(contains("New sale for João Lima"))
        .stdout(contains("for João Lima."))
        // the intent was consumed by the first sale
        .stderr(contains("No customer selected"));

    ctl()
        .args(["--db", &db_path, "sale", "list", "--customer", "c2"])
        .assert()
        .success()
        .stdout(contains("R$ 45.00"));
}

#[test]
fn test_shell_leaving_sales_drops_the_intent() {
    let db_path = setup_test_db("shell_stale_intent");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "shell"])
        .write_stdin("new-sale c1\ntab customers\ntab sales\nsell 10\nstatus\nquit\n")
        .assert()
        .success()
        .stderr(contains("No customer selected"))
        .stdout(contains("Pending new sale").not());
}

#[test]
fn test_shell_renew_supersedes_old_sale() {
    let db_path = setup_test_db("shell_renew");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "shell"])
        .write_stdin("tab aftersales\nrenew s1\nsell 200 Renovação\nquit\n")
        .assert()
        .success()
        .stdout(contains("replacing sale s1"))
        .stdout(contains("Sale s1 marked as renewed."));

    ctl()
        .args(["--db", &db_path, "aftersales", "list"])
        .assert()
        .success()
        .stdout(contains("No follow-ups due."));
}

#[test]
fn test_shell_rejects_unknown_tab() {
    let db_path = setup_test_db("shell_unknown_tab");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "shell"])
        .write_stdin("tab inbox\ntabs\nquit\n")
        .assert()
        .success()
        .stderr(contains("Unknown tab: inbox"))
        .stdout(contains("Pós-Venda"));
}

#[test]
fn test_shell_sell_to_other_customer_keeps_old_sale_due() {
    let db_path = setup_test_db("shell_sell_to_other");
    init_with_data(&db_path);

    ctl()
        .args(["--db", &db_path, "shell"])
        .write_stdin("renew s1\nsell-to c2 80 Outro\nquit\n")
        .assert()
        .success()
        .stdout(contains("for João Lima."))
        .stdout(contains("marked as renewed").not());

    ctl()
        .args(["--db", &db_path, "aftersales", "list"])
        .assert()
        .success()
        .stdout(contains("s1"));
}
