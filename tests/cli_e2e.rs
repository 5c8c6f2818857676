//! End-to-end CLI tests for the narc-fetch binary.
//!
//! These cover the argument surface only; traversal behavior is exercised
//! through the library in `traversal_integration.rs`.

use assert_cmd::Command;
use predicates::prelude::*;

/// Invoking without any selector must exit non-zero.
#[test]
fn test_binary_without_selectors_fails() {
    let mut cmd = Command::cargo_bin("narc-fetch").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("narc-fetch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finnish National Archives"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("narc-fetch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("narc-fetch"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("narc-fetch").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// The help text documents every selector flag.
#[test]
fn test_binary_help_lists_selectors() {
    let mut cmd = Command::cargo_bin("narc-fetch").unwrap();
    let assert = cmd.arg("--help").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for flag in ["--section", "--item", "--series", "--overwrite", "--wait"] {
        assert!(output.contains(flag), "help must mention {flag}");
    }
}
