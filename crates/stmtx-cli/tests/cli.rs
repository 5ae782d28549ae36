use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn stmtx() -> Command {
    Command::cargo_bin("stmtx").unwrap()
}

#[test]
fn help_lists_subcommands() {
    stmtx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn extract_missing_folder_fails() {
    let dir = tempfile::tempdir().unwrap();

    stmtx()
        .current_dir(dir.path())
        .args(["extract", "no-such-folder"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("folder not found"));
}

#[test]
fn extract_reports_every_document() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("first.png"), b"broken image").unwrap();
    fs::write(data.join("second.pdf"), b"broken pdf").unwrap();
    fs::write(data.join("readme.md"), b"# notes").unwrap();
    let output = dir.path().join("results.json");

    stmtx()
        .current_dir(dir.path())
        .args(["extract", "data", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 documents"));

    let results: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["File Name"], "first.png");
    assert_eq!(results[1]["File Name"], "second.pdf");
    assert!(results.iter().all(|r| r["Error"].is_string()));
}

#[test]
fn extract_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("scan.jpg"), b"broken").unwrap();
    let output = dir.path().join("results.csv");

    stmtx()
        .current_dir(dir.path())
        .args(["extract", ".", "--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("file_name,status,bank_name,bank_addresses,bank_contacts,account_number,error")
    );
    assert!(lines.next().unwrap().starts_with("scan.jpg,error,"));
}

#[test]
fn config_init_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("stmtx.json");

    stmtx()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();

    stmtx()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "pdf.min_text_length"])
        .assert()
        .success()
        .stdout(predicate::str::diff("50\n"));
}
