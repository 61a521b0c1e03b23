//! CLI Integration Tests
//!
//! These tests drive the `devlog` binary end-to-end against a temporary
//! data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command rooted in a temporary data directory
fn cli_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devlog").expect("Failed to find devlog binary");
    cmd.env_remove("DEVLOG_HOME")
        .env_remove("DEVLOG_DB")
        .env_remove("DEVLOG_LOG_DIR")
        .env_remove("DEVLOG_TIME_FORMAT")
        .env("NO_COLOR", "1")
        .arg("--home")
        .arg(home.path());
    cmd
}

// ============================================================================
// Switch Tests
// ============================================================================

#[test]
fn test_status_defaults_to_disabled() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagnostic logging: disabled"))
        .stdout(predicate::str::contains("Stored messages: 0"));

    assert!(!home.path().join("devlog_v1.db").exists());
}

#[test]
fn test_enable_persists_switch() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home).arg("enable").assert().success();
    assert!(home.path().join("devlog.yaml").exists());

    cli_cmd(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagnostic logging: enabled"));
}

// ============================================================================
// Message Tests
// ============================================================================

#[test]
fn test_log_while_disabled_records_nothing() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["log", "info", "ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));

    assert!(!home.path().join("devlog_v1.db").exists());
}

#[test]
fn test_log_and_show_scenario() {
    let home = TempDir::new().unwrap();
    cli_cmd(&home).arg("enable").assert().success();

    cli_cmd(&home).args(["log", "info", "started"]).assert().success();
    cli_cmd(&home)
        .args(["log", "error", "--event-id", "7", "crash"])
        .assert()
        .success();

    let output = cli_cmd(&home).arg("show").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(": INFO: started"));
    assert!(lines[1].contains(": ERROR: Event ID: 7, crash"));
}

#[test]
fn test_show_json_returns_raw_rows() {
    let home = TempDir::new().unwrap();
    cli_cmd(&home).arg("enable").assert().success();
    cli_cmd(&home)
        .args(["log", "9", "-e", "-3", "odd level"])
        .assert()
        .success();

    let output = cli_cmd(&home).args(["show", "--json"]).output().unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["severity"], 9);
    assert_eq!(rows[0]["correlation_id"], -3);
    assert_eq!(rows[0]["message"], "odd level");
}

#[test]
fn test_clear_works_after_disable() {
    let home = TempDir::new().unwrap();
    cli_cmd(&home).arg("enable").assert().success();
    cli_cmd(&home).args(["log", "warn", "to be wiped"]).assert().success();
    cli_cmd(&home).arg("disable").assert().success();

    cli_cmd(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("to be wiped"));

    cli_cmd(&home).arg("clear").assert().success();

    cli_cmd(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_severity_is_rejected() {
    let home = TempDir::new().unwrap();

    cli_cmd(&home)
        .args(["log", "loud", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown severity"));
}
