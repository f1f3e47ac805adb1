//! CLI Integration Tests
//!
//! These tests verify the CLI commands end-to-end against the built-in
//! catalog and temporary catalog files.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("portfolio").expect("Failed to find portfolio binary")
}

const TWO_PROJECTS: &str = r#"[
  {
    "id": 10,
    "title": "Static Site",
    "short_summary": "A site.",
    "full_summary": "A static site with no backend.",
    "technologies": ["Rust"],
    "image": "assets/images/site.jpg",
    "source_url": "https://github.com/example/site",
    "live_url": ""
  },
  {
    "id": 20,
    "title": "Dashboard",
    "short_summary": "Charts.",
    "full_summary": "Charts for everything.",
    "technologies": ["Python", "Power BI"],
    "image": "assets/images/dash.jpg"
  }
]"#;

fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("projects.json");
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Catalog Commands
// ============================================================================

#[test]
fn test_list_builtin() {
    cli_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects (6):"))
        .stdout(predicate::str::contains("  1 Cell Test Hardware Validation Pipeline"))
        .stdout(predicate::str::contains("  6 Battery Performance Dashboard"));
}

#[test]
fn test_list_from_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, TWO_PROJECTS);

    cli_cmd()
        .arg("--catalog")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects (2):"))
        .stdout(predicate::str::contains("  10 Static Site"))
        .stdout(predicate::str::contains("  20 Dashboard"));
}

#[test]
fn test_show_project() {
    cli_cmd()
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Battery Analysis GitHub Repository"))
        .stdout(predicate::str::contains("Technologies: Python, Data Analysis, GitHub, Battery Testing"))
        .stdout(predicate::str::contains("Links: none"));
}

#[test]
fn test_show_links() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, TWO_PROJECTS);

    cli_cmd()
        .arg("--catalog")
        .arg(&path)
        .args(["show", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub Repository: https://github.com/example/site"))
        .stdout(predicate::str::contains("Live Demo").not());
}

#[test]
fn test_show_unknown_project() {
    cli_cmd()
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found: 42"));
}

#[test]
fn test_show_invalid_identifier() {
    cli_cmd()
        .args(["show", "three"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project identifier"));
}

#[test]
fn test_validate_catalog_ok() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, TWO_PROJECTS);

    cli_cmd()
        .arg("validate-catalog")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 2 projects"));
}

#[test]
fn test_validate_catalog_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let dupes = TWO_PROJECTS.replace("\"id\": 20", "\"id\": 10");
    let path = write_catalog(&dir, &dupes);

    cli_cmd()
        .arg("validate-catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate project identifier: 10"));
}

#[test]
fn test_export_is_reloadable() {
    let output = cli_cmd().arg("export").output().unwrap();
    assert!(output.status.success());

    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, &String::from_utf8(output.stdout).unwrap());

    cli_cmd()
        .arg("validate-catalog")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 6 projects"));
}

// ============================================================================
// Contact Command
// ============================================================================

#[test]
fn test_contact_valid() {
    cli_cmd()
        .args(["contact", "--name", "Ada", "--email", "ada@example.com", "--message", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for your message!"));
}

#[test]
fn test_contact_reports_each_field() {
    cli_cmd()
        .args(["contact", "--email", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name: Please enter your name"))
        .stderr(predicate::str::contains("email: Please enter a valid email address"))
        .stderr(predicate::str::contains("message: Please enter your message"));
}
