use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn stored_transactions(dir: &TempDir) -> Vec<serde_json::Value> {
    let path = dir
        .path()
        .join("data")
        .join("expense-tracker-transactions.json");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn stored_budgets(dir: &TempDir) -> Vec<serde_json::Value> {
    let path = dir.path().join("data").join("expense-tracker-budgets.json");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_summary_on_empty_store() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["summary", "--date", "2025-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:"))
        .stdout(predicate::str::contains("Oct 2024"))
        .stdout(predicate::str::contains("Mar 2025"))
        .stdout(predicate::str::contains("No transactions yet"));
}

#[test]
fn test_summary_window_ignores_old_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol":"$","trailing_months":0,"recent_limit":0}"#,
    )
    .unwrap();

    tracker(&dir)
        .args(["summary", "--date", "2025-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oct 2024"))
        .stdout(predicate::str::contains("Mar 2025"))
        .stdout(predicate::str::contains("Sep 2024").not());
}

#[test]
fn test_add_then_summary() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["transaction", "add", "10", "Groceries", "-c", "Food & Dining", "-d", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction"));
    tracker(&dir)
        .args(["transaction", "add", "5", "Snacks", "-c", "Food & Dining", "-d", "2024-01-20"])
        .assert()
        .success();
    tracker(&dir)
        .args(["txn", "add", "100", "Paycheck", "-c", "Income", "-d", "2024-01-01", "--income"])
        .assert()
        .success();

    tracker(&dir)
        .args(["summary", "--date", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:"))
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("$15.00"))
        .stdout(predicate::str::contains("$85.00"))
        .stdout(predicate::str::contains("Food & Dining"));

    let stored = stored_transactions(&dir);
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0]["type"], "expense");
    assert_eq!(stored[0]["amount"], 10);
    assert_eq!(stored[0]["date"], "2024-01-15");
    assert_ne!(stored[0]["id"], stored[1]["id"]);
}

#[test]
fn test_invalid_transaction_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["transaction", "add", "0", "Nothing", "-d", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));

    assert!(!dir
        .path()
        .join("data")
        .join("expense-tracker-transactions.json")
        .exists());
}

#[test]
fn test_edit_and_delete_transaction() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["transaction", "add", "4.50", "Coffee", "-c", "Food & Dining", "-d", "2025-01-15"])
        .assert()
        .success();
    let id = stored_transactions(&dir)[0]["id"].as_str().unwrap().to_string();

    tracker(&dir)
        .args(["transaction", "edit", &id, "--amount", "5.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5.25"));
    assert_eq!(stored_transactions(&dir)[0]["amount"], 5.25);

    tracker(&dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(stored_transactions(&dir).len(), 1);

    tracker(&dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .success();
    assert!(stored_transactions(&dir).is_empty());

    tracker(&dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_list_filters_by_type() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["transaction", "add", "20", "Taxi", "-c", "Transportation", "-d", "2025-02-01"])
        .assert()
        .success();
    tracker(&dir)
        .args(["transaction", "add", "900", "Salary", "-c", "Income", "-d", "2025-02-02", "--income"])
        .assert()
        .success();

    tracker(&dir)
        .args(["transaction", "list", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Taxi").not());
}

#[test]
fn test_budget_set_and_status() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "Food & Dining", "50", "--month", "2024-01"])
        .assert()
        .success();
    tracker(&dir)
        .args(["transaction", "add", "70", "Dinner", "-c", "Food & Dining", "-d", "2024-01-10"])
        .assert()
        .success();

    tracker(&dir)
        .args(["budget", "status", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Status - Jan 2024"))
        .stdout(predicate::str::contains("$20.00 over budget"))
        .stdout(predicate::str::contains("over limit"));

    let budgets = stored_budgets(&dir);
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["month"], "2024-01");
    assert_eq!(budgets[0]["amount"], 50);
}

#[test]
fn test_budget_validation() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "", "0", "--month", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category is required"))
        .stderr(predicate::str::contains("Month is required"));
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["transaction", "add", "12.5", "Lunch, team", "-c", "Food & Dining", "-d", "2025-01-15"])
        .assert()
        .success();

    tracker(&dir)
        .args(["transaction", "export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Date,Type,Category,Description,Amount\n"))
        .stdout(predicate::str::contains(",2025-01-15,expense,Food & Dining,\"Lunch, team\",12.50"));
}

#[test]
fn test_full_export_message_names_budgets() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("backup.json");

    tracker(&dir)
        .args(["budget", "set", "Travel", "200", "--month", "2025-01"])
        .assert()
        .success();

    tracker(&dir)
        .args(["transaction", "export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported transactions and budgets to"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"budgets\""));
    assert!(text.contains("Travel"));
}

#[test]
fn test_budget_export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "Travel", "200", "--month", "2025-01"])
        .assert()
        .success();

    tracker(&dir)
        .args(["budget", "export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Month,Category,Amount\n"))
        .stdout(predicate::str::contains(",2025-01,Travel,200.00"));
}

#[test]
fn test_oversized_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["transaction", "add", "99999999999999999", "Yacht", "-d", "2025-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount is too large"));
}

#[test]
fn test_malformed_store_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("expense-tracker-transactions.json"), "{not json").unwrap();

    tracker(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_add_refuses_to_overwrite_malformed_store() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    let file = data.join("expense-tracker-transactions.json");
    let corrupt = r#"[{"id":"1","amount":1500,"description":"rent","#;
    std::fs::write(&file, corrupt).unwrap();

    tracker(&dir)
        .args(["transaction", "add", "5", "Coffee", "--date", "2025-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), corrupt);
}

#[test]
fn test_categories_and_config() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("#F7DC6F"));

    tracker(&dir)
        .args(["config", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"));

    tracker(&dir)
        .args(["summary", "--date", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€0.00"));
}
