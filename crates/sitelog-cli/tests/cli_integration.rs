//! Integration tests for sitelog-cli
//!
//! These tests verify the CLI commands work end-to-end against a
//! temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the sitelog binary
fn sitelog() -> Command {
    Command::cargo_bin("sitelog").unwrap()
}

/// Get a Command pinned to a temporary data directory
fn sitelog_in(dir: &TempDir) -> Command {
    let mut cmd = sitelog();
    cmd.env("SITELOG_DATA_DIR", dir.path());
    cmd
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_cli_help() {
    sitelog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitelog"))
        .stdout(predicate::str::contains("Commands"));
}

#[test]
fn test_cli_version() {
    sitelog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitelog"));
}

#[test]
fn test_report_help() {
    sitelog()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("copy-last"));
}

#[test]
fn test_export_help() {
    sitelog()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excel"));
}

// =============================================================================
// Report Round Trip
// =============================================================================

#[test]
fn test_add_then_list_round_trip() {
    let dir = TempDir::new().unwrap();

    sitelog_in(&dir)
        .args([
            "--no-seed",
            "report",
            "add",
            "--project",
            "Pump Check",
            "--name",
            "A. Smith",
            "--dept",
            "Maintenance",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created report"));

    sitelog_in(&dir)
        .args(["--no-seed", "--format", "json", "report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pump Check"))
        .stdout(predicate::str::contains("Maintenance"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let dir = TempDir::new().unwrap();

    sitelog_in(&dir)
        .args(["--no-seed", "report", "add", "--project", "P", "--name", "N", "--date", "01-05-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_copy_last_creates_a_fresh_report() {
    let dir = TempDir::new().unwrap();

    sitelog_in(&dir)
        .args(["--no-seed", "report", "add", "--project", "Pump Check", "--name", "A. Smith"])
        .assert()
        .success();

    sitelog_in(&dir)
        .args(["--no-seed", "report", "copy-last", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied report"));

    sitelog_in(&dir)
        .args(["--no-seed", "--format", "json", "report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-01"));
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn test_first_list_seeds_example_reports() {
    let dir = TempDir::new().unwrap();

    sitelog_in(&dir)
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RPT-TEST"));
}

#[test]
fn test_no_seed_starts_empty() {
    let dir = TempDir::new().unwrap();

    sitelog_in(&dir)
        .args(["--no-seed", "report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reports found."));
}

// =============================================================================
// Dashboard
// =============================================================================

#[test]
fn test_dashboard_stats_on_seeded_store() {
    let dir = TempDir::new().unwrap();

    sitelog_in(&dir)
        .args(["dashboard", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion Rate"))
        .stdout(predicate::str::contains("Total Manpower"));
}

// =============================================================================
// Export and Backup
// =============================================================================

#[test]
fn test_export_excel_writes_workbook() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("export.xlsx");

    sitelog_in(&dir)
        .args(["export", "excel", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let metadata = std::fs::metadata(&out).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_backup_export_then_restore() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.json");

    sitelog_in(&dir)
        .args(["--no-seed", "report", "add", "--project", "Pump Check", "--name", "A. Smith"])
        .assert()
        .success();

    sitelog_in(&dir)
        .args(["--no-seed", "backup", "export", "--output", backup.to_str().unwrap()])
        .assert()
        .success();

    sitelog_in(&dir)
        .args(["--no-seed", "backup", "restore", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 reports"));
}

#[test]
fn test_backup_restore_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{definitely not a backup").unwrap();

    sitelog_in(&dir)
        .args(["--no-seed", "report", "add", "--project", "Keep", "--name", "N"])
        .assert()
        .success();

    sitelog_in(&dir)
        .args(["--no-seed", "backup", "restore", bad.to_str().unwrap()])
        .assert()
        .failure();

    // The stored collection is untouched
    sitelog_in(&dir)
        .args(["--no-seed", "--format", "json", "report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep"));
}
