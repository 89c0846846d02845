use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.current_dir(home)
        .arg("--home")
        .arg(home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("FINANCE_LEDGER_HOME");
    cmd
}

fn add(home: &Path, amount: &str, category: &str, subcategory: &str, date: &str) {
    ledger(home)
        .args(["add", amount, "--category", category, "--subcategory", subcategory])
        .args(["--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully"));
}

#[test]
fn init_creates_files() {
    let home = TempDir::new().unwrap();

    ledger(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finance ledger initialized"));

    let data = fs::read_to_string(home.path().join("finance_data.csv")).unwrap();
    assert_eq!(data, "date,amount,category,subcategory,description\n");
    assert!(home.path().join("finance_config.json").exists());
}

#[test]
fn add_then_report() {
    let home = TempDir::new().unwrap();
    add(home.path(), "1000", "Income", "Salary", "10-08-2025");
    add(home.path(), "200", "expense", "Food", "11-08-2025");

    ledger(home.path())
        .args(["report", "--start", "01-08-2025", "--end", "31-08-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction History"))
        .stdout(predicate::str::contains("Category Summary"))
        .stdout(predicate::str::contains("  - Salary"))
        .stdout(predicate::str::contains("$1,000.00"))
        .stdout(predicate::str::contains("$200.00"))
        .stdout(predicate::str::contains("$800.00"));

    let data = fs::read_to_string(home.path().join("finance_data.csv")).unwrap();
    assert_eq!(
        data,
        "date,amount,category,subcategory,description\n\
         10-08-2025,1000.00,Income,Salary,\n\
         11-08-2025,200.00,Expense,Food,\n"
    );
}

#[test]
fn add_rejects_bad_input() {
    let home = TempDir::new().unwrap();

    for amount in ["0", "abc", "-5", "90000000000000000"] {
        ledger(home.path())
            .args(["add", amount, "-c", "Income", "-s", "Salary", "-d", "10-08-2025"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Validation error"));
    }

    ledger(home.path())
        .args(["add", "10", "-c", "Income", "-s", "Salary", "-d", "2025-08-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    ledger(home.path())
        .args(["add", "10", "-c", "Income", "-s", "Food", "-d", "10-08-2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a configured Income subcategory"));

    let data = fs::read_to_string(home.path().join("finance_data.csv")).unwrap();
    assert_eq!(data, "date,amount,category,subcategory,description\n");
}

#[test]
fn report_empty_and_reversed_ranges() {
    let home = TempDir::new().unwrap();
    add(home.path(), "50", "Expense", "Food", "15-08-2025");

    ledger(home.path())
        .args(["report", "--start", "01-01-2020", "--end", "31-01-2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No transactions found in the given date range.",
        ));

    ledger(home.path())
        .args(["report", "--start", "31-08-2025", "--end", "01-08-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn report_exports_category_csv() {
    let home = TempDir::new().unwrap();
    add(home.path(), "1000", "Income", "Salary", "10-08-2025");

    ledger(home.path())
        .args(["report", "-s", "01-08-2025", "-e", "31-08-2025", "-o", "summary.csv"])
        .assert()
        .success();

    let summary = fs::read_to_string(home.path().join("summary.csv")).unwrap();
    assert!(summary.contains("01-08-2025,31-08-2025,Income,Salary,1000.00,1"));
}

#[test]
fn category_add_and_remove() {
    let home = TempDir::new().unwrap();

    ledger(home.path())
        .args(["category", "add", "Expense", "Groceries"])
        .assert()
        .success();

    ledger(home.path())
        .args(["category", "add", "Expense", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    ledger(home.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));

    add(home.path(), "30", "Expense", "Groceries", "12-08-2025");

    ledger(home.path())
        .args(["category", "remove", "Expense", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Expense subcategory: Groceries"));

    // Stored records keep the removed name
    ledger(home.path())
        .args(["report", "-s", "01-08-2025", "-e", "31-08-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));

    ledger(home.path())
        .args(["category", "remove", "Expense", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn currency_set_changes_report() {
    let home = TempDir::new().unwrap();
    add(home.path(), "1234.5", "Income", "Salary", "10-08-2025");

    ledger(home.path())
        .args(["currency", "set", "--symbol", "€", "--code", "eur", "--position", "after"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€ (EUR), symbol after amount"));

    ledger(home.path())
        .args(["report", "-s", "01-08-2025", "-e", "31-08-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,234.50€"));

    ledger(home.path())
        .args(["currency", "set", "GBP"])
        .assert()
        .success();

    ledger(home.path())
        .args(["currency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£ (GBP)"));
}

#[test]
fn export_formats() {
    let home = TempDir::new().unwrap();
    add(home.path(), "45.5", "Expense", "Food", "10-08-2025");

    ledger(home.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("finance_export.csv"));
    let csv = fs::read_to_string(home.path().join("finance_export.csv")).unwrap();
    assert!(csv.contains("10-08-2025,45.50,Expense,Food,"));

    ledger(home.path())
        .args(["export", "--format", "json", "--output", "all.json"])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(home.path().join("all.json")).unwrap()).unwrap();
    assert_eq!(json["metadata"]["transaction_count"], 1);
    assert_eq!(json["currency"]["code"], "USD");
}

#[test]
fn menu_reads_scripted_input() {
    let home = TempDir::new().unwrap();

    ledger(home.path())
        .write_stdin("1\n10-08-2025\n250\n1\n2\nSide job\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully"));

    let data = fs::read_to_string(home.path().join("finance_data.csv")).unwrap();
    assert!(data.contains("10-08-2025,250.00,Income,Freelance,Side job"));
}

#[test]
fn amounts_keep_full_precision() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("finance_data.csv"),
        "date,amount,category,subcategory,description\n\
         10-08-2025,1000.0,Income,Salary,\n\
         11-08-2025,12.345,Expense,Food,\n",
    )
    .unwrap();
    add(home.path(), "1e3", "Income", "Freelance", "12-08-2025");
    add(home.path(), "0.005", "Expense", "Food", "13-08-2025");

    ledger(home.path())
        .args(["report", "-s", "01-08-2025", "-e", "31-08-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$12.35"))
        .stdout(predicate::str::contains("$2,000.00"))
        .stdout(predicate::str::contains("$1,987.65"));

    let data = fs::read_to_string(home.path().join("finance_data.csv")).unwrap();
    assert!(data.contains("11-08-2025,12.345,Expense,Food,\n"));
    assert!(data.contains("12-08-2025,1000.00,Income,Freelance,\n"));
    assert!(data.ends_with("13-08-2025,0.005,Expense,Food,\n"));
}

#[test]
fn unreadable_store_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("finance_data.csv"),
        "date,amount,category,subcategory,description\nnot-a-date,1,Income,Salary,\n",
    )
    .unwrap();

    ledger(home.path())
        .args(["report", "-s", "01-08-2025", "-e", "31-08-2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Store unavailable"));
}
