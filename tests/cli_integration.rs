//! CLI integration tests
//!
//! Runs the server binary for the cases that end before it starts serving.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("peakshaving-server");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("peakshaving-server");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_invalid_host() {
    let mut cmd = cargo_bin_cmd!("peakshaving-server");
    cmd.args(["--host", "localhost", "--port", "0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid host address: localhost"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("peakshaving.toml");

    let mut cmd = cargo_bin_cmd!("peakshaving-server");
    cmd.arg("--config").arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_log_level_in_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"shouting\"").unwrap();

    let mut cmd = cargo_bin_cmd!("peakshaving-server");
    cmd.arg("--config").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level: shouting"));
}

#[test]
fn test_invalid_port_env() {
    let mut cmd = cargo_bin_cmd!("peakshaving-server");
    cmd.env("PEAKSHAVING_PORT", "sixty-eighty");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid port"));
}
