//! CLI output integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Config pointing at a closed local port so report commands fail fast.
const UNREACHABLE: &str = r#"
[api]
base_url = "http://127.0.0.1:9/rest/v1"
organization_id = "1"

[api.http]
timeout_ms = 1000
connect_timeout_ms = 500
retry_max_attempts = 1
retry_backoff_ms = 1
"#;

fn chiplead(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("chiplead");
    cmd.current_dir(dir)
        .env_remove("CHIPLEAD_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn help_lists_report_commands() {
    let dir = tempfile::tempdir().unwrap();
    chiplead(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chiplead"))
        .stdout(predicate::str::contains("leaderboard"))
        .stdout(predicate::str::contains("player"))
        .stdout(predicate::str::contains("schedule"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_binary() {
    let dir = tempfile::tempdir().unwrap();
    chiplead(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chiplead"));
}

#[test]
fn leaderboard_help_lists_metrics() {
    let dir = tempfile::tempdir().unwrap();
    chiplead(dir.path())
        .args(["--color", "never", "leaderboard", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("knockouts"))
        .stdout(predicate::str::contains("--watch"));
}

#[test]
fn unknown_metric_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    chiplead(dir.path())
        .args(["leaderboard", "1", "--by", "style"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown metric"));
}

#[test]
fn config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path_arg = path.to_string_lossy().to_string();

    chiplead(dir.path())
        .args(["config", "init", "-c", &path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    chiplead(dir.path())
        .args(["config", "validate", "-c", &path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));

    chiplead(dir.path())
        .args(["config", "init", "-c", &path_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_validate_names_bad_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[api]\nbase_url = \"https://x.example\"\n");

    chiplead(dir.path())
        .args(["config", "validate", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.organization_id"));
}

#[test]
fn config_show_json_reports_missing_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, UNREACHABLE);

    chiplead(dir.path())
        .args(["--json", "config", "show", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\":\"config.show\""))
        .stdout(predicate::str::contains("\"api_key_loaded\":false"));
}

#[test]
fn api_key_never_appears_in_config_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, UNREACHABLE);

    chiplead(dir.path())
        .env("CHIPLEAD_API_KEY", "very-secret-key")
        .args(["--json", "config", "show", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"api_key_loaded\":true"))
        .stdout(predicate::str::contains("very-secret-key").not());
}

#[test]
fn report_without_config_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    chiplead(dir.path())
        .args(["tournaments", "-c", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn json_errors_are_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    chiplead(dir.path())
        .args(["--json", "summary", "1", "-c", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"type\":\"error\""));
}

#[test]
fn unreachable_source_degrades_to_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, UNREACHABLE);

    chiplead(dir.path())
        .args(["--json", "tournaments", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tournaments\":[]"));
}

#[test]
fn unreachable_source_renders_empty_leaderboard() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, UNREACHABLE);

    chiplead(dir.path())
        .args(["--color", "never", "leaderboard", "7", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No standings recorded"));
}
