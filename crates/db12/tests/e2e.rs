//! End-to-end CLI integration tests.
//!
//! The real-workload tests run the full 12.5M-draw iterations and take
//! a few seconds each; they only assert the output contract, never
//! absolute score values.

use assert_cmd::Command;
use predicates::prelude::*;

fn db12() -> Command {
    Command::cargo_bin("db12").expect("binary not found")
}

#[test]
fn help_flag() {
    db12()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DB12"));
}

#[test]
fn version_flag() {
    db12().arg("--version").assert().success();
}

#[test]
fn version_subcommand() {
    db12()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("DB12"));
}

#[test]
fn no_args_prints_help() {
    db12()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn completion_generates_script() {
    db12()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db12"));
}

#[test]
fn unknown_mode_fails() {
    db12().arg("frobnicate").assert().failure();
}

#[test]
fn multiple_requires_copies() {
    db12().arg("multiple").assert().failure();
}

#[test]
fn zero_copies_is_a_config_error() {
    db12()
        .args(["multiple", "0"])
        .assert()
        .failure()
        .code(predicate::eq(4));
}

#[test]
fn single_prints_a_score() {
    let output = db12()
        .args(["single", "--no-correction"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9]+(\.[0-9]+)?\n$").unwrap());

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let norm: f64 = stdout.trim().parse().unwrap();
    // Zero CPU time is an error exit, never a score, so a printed norm
    // is strictly positive. The ceiling is generous on purpose: it
    // catches a mis-scaled calibration constant without asserting how
    // fast the host happens to be.
    assert!(norm > 0.0, "norm was {norm}");
    assert!(norm < 100_000.0, "norm was {norm}");
}

#[test]
fn single_writes_json_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("score.json");

    db12()
        .args(["single", "--no-correction", "--json", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    let norm: f64 = content.trim().parse().unwrap();
    assert!(norm > 0.0);
}

#[test]
fn multiple_two_copies_prints_two_lines() {
    let output = db12()
        .args(["multiple", "2", "--no-correction", "--extra-iteration"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "expected summary + raw lines: {stdout:?}");
    let summary: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(summary.len(), 5);
    assert_eq!(summary[0], "2");
    assert_eq!(lines[1].split_whitespace().count(), 2);
    // Raw scores are sorted ascending
    let raw: Vec<f64> = lines[1]
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();
    assert!(raw[0] <= raw[1]);
}
