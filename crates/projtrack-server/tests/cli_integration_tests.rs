//! CLI integration tests for projtrack
//!
//! Tests the projtrack CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's configuration and API key
#[allow(deprecated)]
fn projtrack_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("projtrack").unwrap();
    cmd.env("PROJTRACK_CONFIG_DIR", config_dir.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("PORT");
    cmd
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    projtrack_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_list_defaults() {
    let dir = TempDir::new().unwrap();
    projtrack_cmd(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server.port = 3000"))
        .stdout(predicate::str::contains("summarizer.model = gemini-2.0-flash"))
        .stdout(predicate::str::contains("summarizer.api_key = (not set"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();

    projtrack_cmd(&dir)
        .args(["config", "set", "server.port", "8081"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set server.port = 8081"));

    assert!(dir.path().join("config.toml").exists());

    projtrack_cmd(&dir)
        .args(["config", "get", "server.port"])
        .assert()
        .success()
        .stdout("8081\n");
}

#[test]
fn test_config_api_key_is_redacted() {
    let dir = TempDir::new().unwrap();
    projtrack_cmd(&dir)
        .env("GEMINI_API_KEY", "super-secret-9876")
        .args(["config", "get", "summarizer.api_key"])
        .assert()
        .success()
        .stdout("***9876\n");
}

#[test]
fn test_config_set_api_key_fails() {
    let dir = TempDir::new().unwrap();
    projtrack_cmd(&dir)
        .args(["config", "set", "summarizer.api_key", "leaked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_config_path_uses_config_dir_flag() {
    let dir = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    projtrack_cmd(&dir)
        .arg("--config-dir")
        .arg(other.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            other.path().join("config.toml").display().to_string(),
        ));
}

#[test]
fn test_doctor_reports_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("data").join("projtrack.db");

    projtrack_cmd(&dir)
        .args(["config", "set", "database.path"])
        .arg(&db_path)
        .assert()
        .success();

    projtrack_cmd(&dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Database: Connected"))
        .stdout(predicate::str::contains("API Key: Not configured"));

    assert!(db_path.exists());
}
