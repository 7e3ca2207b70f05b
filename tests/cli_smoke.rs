#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points `WEB_S_CONFIG` into its own temp dir so the real
//! `~/.web-s.conf` is never touched. Searches are not exercised here
//! because they would open a browser.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn web_s(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("web-s").unwrap();
    cmd.env("WEB_S_CONFIG", temp_dir.path().join(".web-s.conf"))
        .env("NO_COLOR", "1")
        .env_remove("WEB_S_QUIET");
    cmd
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let temp_dir = TempDir::new().unwrap();

    web_s(&temp_dir)
        .assert()
        .code(exitcode::USAGE)
        .stdout(predicate::str::contains(
            "USAGE: web-s [provider] <searchstring>",
        ))
        .stdout(predicate::str::contains("  google (default)"))
        .stderr(predicate::str::contains("ERROR: No searchstring"));
}

#[test]
fn test_list_shows_sample_providers_in_order() {
    let temp_dir = TempDir::new().unwrap();

    web_s(&temp_dir).arg("--list").assert().success().stdout(
        "google (default)\n\
         twitter: -t/--twitter\n\
         reddit: -r/--reddit\n\
         stackoverflow: -s/--stackoverflow\n\
         leo: -l/--leo\n",
    );
}

#[test]
fn test_help_displays_usage_and_providers() {
    let temp_dir = TempDir::new().unwrap();

    for flag in ["-h", "--help"] {
        web_s(&temp_dir)
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE: web-s"))
            .stdout(predicate::str::contains("Available providers:"))
            .stdout(predicate::str::contains("  reddit: -r/--reddit"))
            .stdout(predicate::str::contains("--generate-config"));
    }
}

#[test]
fn test_version_displays_version() {
    let temp_dir = TempDir::new().unwrap();

    web_s(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_first_run_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".web-s.conf");

    web_s(&temp_dir)
        .arg("--list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created config file"));

    assert!(config_path.is_file());
}

#[test]
fn test_quiet_mode_hides_status() {
    let temp_dir = TempDir::new().unwrap();

    web_s(&temp_dir)
        .env("WEB_S_QUIET", "1")
        .arg("--list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
