use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn jobtrail_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("jobtrail"))
}

fn init_project(dir: &Path) {
    jobtrail_cmd()
        .arg("init")
        .current_dir(dir)
        .assert()
        .success();
}

/// Add an application and return its JSON representation.
fn add_json(dir: &Path, company: &str, role: &str, extra: &[&str]) -> serde_json::Value {
    let output = jobtrail_cmd()
        .args(["add", company, role, "--json"])
        .args(extra)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    jobtrail_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("job applications"));
}

#[test]
fn test_version() {
    jobtrail_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jobtrail"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    jobtrail_cmd()
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not initialized")
                .or(predicate::str::contains("Failed to load")),
        );
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    jobtrail_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".jobtrail.yml").exists());
    assert!(temp_dir.path().join(".jobtrail").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    jobtrail_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

// =============================================================================
// Add, List, Show
// =============================================================================

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    jobtrail_cmd()
        .args(["add", "Acme Corp", "Platform Engineer"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    jobtrail_cmd()
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform Engineer"))
        .stdout(predicate::str::contains("Acme Corp"));
}

#[test]
fn test_add_json_uses_document_field_names() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    let job = add_json(temp_dir.path(), "Acme", "Engineer", &["--salary", "100k"]);

    assert_eq!(job["company"], "Acme");
    assert_eq!(job["role"], "Engineer");
    assert_eq!(job["status"], "Saved");
    assert_eq!(job["salary"], "100k");
    assert!(job["dateApplied"].as_str().unwrap().len() > 0);
    assert!(job["updatedAt"].is_string());
}

#[test]
fn test_add_rejects_empty_company() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    jobtrail_cmd()
        .args(["add", "  ", "Engineer"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Company"));
}

#[test]
fn test_show_by_id_prefix() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    let job = add_json(temp_dir.path(), "Acme", "Engineer", &[]);
    let prefix = &job["id"].as_str().unwrap()[..8];

    jobtrail_cmd()
        .args(["show", prefix])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn test_newest_first_ordering() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    add_json(temp_dir.path(), "First Co", "Engineer", &[]);
    add_json(temp_dir.path(), "Second Co", "Engineer", &[]);

    let output = jobtrail_cmd()
        .args(["list", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    let jobs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(jobs[0]["company"], "Second Co");
    assert_eq!(jobs[1]["company"], "First Co");
}

// =============================================================================
// Update, Move, Delete
// =============================================================================

#[test]
fn test_update_fields() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    let job = add_json(temp_dir.path(), "Acme", "Engineer", &["--salary", "100k"]);
    let id = job["id"].as_str().unwrap();

    jobtrail_cmd()
        .args(["update", id, "--role", "Senior Engineer", "--salary", ""])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let output = jobtrail_cmd()
        .args(["show", id, "--json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    let updated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(updated["role"], "Senior Engineer");
    // empty string cleared the optional field
    assert!(updated.get("salary").is_none() || updated["salary"].is_null());
}

#[test]
fn test_move_changes_status() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    let job = add_json(temp_dir.path(), "Acme", "Engineer", &[]);
    let id = job["id"].as_str().unwrap();

    jobtrail_cmd()
        .args(["move", id, "interviewing"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved"));

    jobtrail_cmd()
        .args(["list", "--status", "interviewing"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn test_move_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    jobtrail_cmd()
        .args(["move", "deadbeef", "applied"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_delete_with_force() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    let job = add_json(temp_dir.path(), "Acme", "Engineer", &[]);
    let id = job["id"].as_str().unwrap();

    jobtrail_cmd()
        .args(["delete", id, "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    jobtrail_cmd()
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No applications found"));
}

// =============================================================================
// Board and filters
// =============================================================================

#[test]
fn test_board_shows_all_columns() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    add_json(temp_dir.path(), "Acme", "Engineer", &["--status", "offer"]);

    jobtrail_cmd()
        .arg("board")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"))
        .stdout(predicate::str::contains("Interviewing"))
        .stdout(predicate::str::contains("Offer"))
        .stdout(predicate::str::contains("Rejected"));
}

#[test]
fn test_list_active_excludes_rejected() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    add_json(temp_dir.path(), "Keep Co", "Engineer", &["--status", "applied"]);
    add_json(temp_dir.path(), "Gone Co", "Engineer", &["--status", "rejected"]);

    jobtrail_cmd()
        .args(["list", "--active"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep Co"))
        .stdout(predicate::str::contains("Gone Co").not());
}

// =============================================================================
// Export / Import
// =============================================================================

#[test]
fn test_export_stdout_is_json_array() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    add_json(temp_dir.path(), "Acme", "Engineer", &[]);

    let output = jobtrail_cmd()
        .arg("export")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(document.is_array());
    assert_eq!(document.as_array().unwrap().len(), 1);
}

#[test]
fn test_export_import_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    let first = add_json(temp_dir.path(), "First Co", "Engineer", &[]);
    add_json(temp_dir.path(), "Second Co", "Designer", &["--status", "offer"]);

    let export_path = temp_dir.path().join("backup.json");
    jobtrail_cmd()
        .args(["export", export_path.to_str().unwrap()])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    // Mutate the live list, then restore from the export
    jobtrail_cmd()
        .args(["delete", first["id"].as_str().unwrap(), "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    jobtrail_cmd()
        .args(["import", export_path.to_str().unwrap(), "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2"));

    let output = jobtrail_cmd()
        .args(["list", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    let jobs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(jobs.as_array().unwrap().len(), 2);
    assert_eq!(jobs[0]["company"], "Second Co");
    assert_eq!(jobs[1]["company"], "First Co");
    assert_eq!(jobs[1]["id"], first["id"]);
}

#[test]
fn test_import_rejects_non_array_document() {
    let temp_dir = TempDir::new().unwrap();
    init_project(temp_dir.path());

    add_json(temp_dir.path(), "Acme", "Engineer", &[]);

    let bad_path = temp_dir.path().join("bad.json");
    std::fs::write(&bad_path, r#"{"jobs": []}"#).unwrap();

    jobtrail_cmd()
        .args(["import", bad_path.to_str().unwrap(), "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();

    // The existing list is untouched
    jobtrail_cmd()
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}
