//! End-to-end tests for the `ledger` binary
//!
//! Each test points `LEDGER_DATA_DIR` at its own temporary directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

fn stored(dir: &Path) -> serde_json::Value {
    let path = dir.join("data").join("pf_tracker_transactions_v1.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn list_on_fresh_directory_shows_placeholder() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."))
        .stdout(predicate::str::contains("Balance:  0.00"));
}

#[test]
fn add_expense_shows_signed_amount_and_persists() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "Coffee", "-3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Coffee"))
        .stdout(predicate::str::contains("-3.50"));

    let value = stored(dir.path());
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["description"], "Coffee");
    assert_eq!(entries[0]["amount"], 3.5);
    assert_eq!(entries[0]["type"], "expense");
}

#[test]
fn totals_group_thousands() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "Salary", "1000", "--type", "income"])
        .assert()
        .success();
    ledger(dir.path())
        .args(["add", "Rent", "250"])
        .assert()
        .success();

    ledger(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("1,000.00"))
        .stdout(predicate::str::contains("250.00"))
        .stdout(predicate::str::contains("750.00"));

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("+1,000.00"))
        .stdout(predicate::str::contains("-250.00"));
}

#[test]
fn empty_description_is_rejected() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "   ", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please add a description"));

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn zero_or_garbage_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    for amount in ["0", "abc"] {
        ledger(dir.path())
            .args(["add", "Lunch", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please enter a non-zero amount"));
    }
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "Book", "12"])
        .assert()
        .success();

    ledger(dir.path())
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
    assert_eq!(stored(dir.path()).as_array().unwrap().len(), 1);

    ledger(dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));
    assert_eq!(stored(dir.path()), serde_json::json!([]));
}

#[test]
fn remove_by_prefix_and_unknown_id() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "Taxi", "20"])
        .assert()
        .success();

    let id = stored(dir.path())[0]["id"].as_str().unwrap().to_string();

    ledger(dir.path())
        .args(["remove", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transaction matched"));
    assert_eq!(stored(dir.path()).as_array().unwrap().len(), 1);

    ledger(dir.path())
        .args(["rm", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed transaction"));
    assert_eq!(stored(dir.path()), serde_json::json!([]));
}

#[test]
fn malformed_storage_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("pf_tracker_transactions_v1.json"), "{not json").unwrap();

    ledger(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pf_tracker_transactions_v1.json"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn oversized_amount_is_rejected_and_totals_still_print() {
    let dir = TempDir::new().unwrap();

    ledger(dir.path())
        .args(["add", "Lottery", "50000000000000000", "-t", "income"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no larger than 999,999,999,999.99"));

    for _ in 0..2 {
        ledger(dir.path())
            .args(["add", "Jackpot", "999999999999.99", "-t", "income"])
            .assert()
            .success();
    }

    ledger(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("1,999,999,999,999.98"));
}
