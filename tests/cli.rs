//! Command-line surface tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_viewer() {
    Command::cargo_bin("histoview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("histogram viewer"))
        .stdout(predicate::str::contains("--log"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("histoview")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_rejected() {
    Command::cargo_bin("histoview")
        .unwrap()
        .arg("--bins")
        .arg("10")
        .assert()
        .failure();
}

#[test]
fn unwritable_log_path_fails_before_terminal_setup() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("missing").join("histoview.log");

    Command::cargo_bin("histoview")
        .unwrap()
        .arg("--log")
        .arg(&log_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open log file"));
}
