#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctl() -> Command {
    cargo_bin_cmd!("controlarva")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_controlarva.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store and open a session.
pub fn init_logged_in(db_path: &str) {
    ctl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ctl().args(["--db", db_path, "login"]).assert().success();
}

/// Initialized store with two customers and two sales (one of them old).
pub fn init_with_data(db_path: &str) {
    init_logged_in(db_path);

    ctl()
        .args([
            "--db", db_path, "customer", "add", "Maria Souza", "--phone", "11 99999-0000", "--city",
            "Campinas", "--id", "c1",
        ])
        .assert()
        .success();

    ctl()
        .args([
            "--db", db_path, "customer", "add", "João Lima", "--phone", "11 98888-1111", "--id", "c2",
        ])
        .assert()
        .success();

    ctl()
        .args([
            "--db", db_path, "sale", "add", "--customer", "c1", "--date", "2025-01-10", "--item",
            "Kit larvas:2:150", "--id", "s1",
        ])
        .assert()
        .success();

    ctl()
        .args([
            "--db", db_path, "sale", "add", "--customer", "c2", "--date", "today", "--amount",
            "99,90", "--id", "s2",
        ])
        .assert()
        .success();
}
