//! Runs the `filecompare` binary and checks its exit codes and output.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn filecompare(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_filecompare"));
    cmd.env("FILECOMPARE_CONFIG_PATH", dir.join("missing.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_pair(dir: &Path, source: &str, target: &str) -> (String, String) {
    let source_path = dir.join("source.txt");
    let target_path = dir.join("target.txt");
    fs::write(&source_path, source).unwrap();
    fs::write(&target_path, target).unwrap();
    (
        source_path.display().to_string(),
        target_path.display().to_string(),
    )
}

fn json_status(stdout: &[u8]) -> serde_json::Value {
    let value: serde_json::Value = serde_json::from_slice(stdout).expect("json report");
    value["status"].clone()
}

#[test]
fn identical_files_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let (source, target) = write_pair(dir.path(), "a\nb\n", "a\nb");

    filecompare(dir.path())
        .args(["compare", &source, &target])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("the texts are identical"));
}

#[test]
fn differing_files_exit_one_without_colors_when_piped() {
    let dir = tempfile::tempdir().unwrap();
    let (source, target) = write_pair(dir.path(), "hello\nsame\n", "hullo\nsame\n");

    filecompare(dir.path())
        .args(["compare", &source, &target])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Line 1 (Source): hello"))
        .stdout(predicate::str::contains("Line 1 (Target): hullo"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn missing_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let (source, _) = write_pair(dir.path(), "a", "a");
    let missing = dir.path().join("nope.txt").display().to_string();

    filecompare(dir.path())
        .args(["compare", &source, &missing])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load files"));
}

#[test]
fn source_can_come_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (_, target) = write_pair(dir.path(), "", "one\ntwo\n");

    filecompare(dir.path())
        .args(["compare", "-", &target])
        .write_stdin("one\ntwo\n")
        .assert()
        .code(0);

    filecompare(dir.path())
        .args(["compare", "-", &target])
        .write_stdin("one\nthree\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Line 2 (Source): three"));
}

#[test]
fn stdin_on_both_sides_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    filecompare(dir.path())
        .args(["compare", "-", "-"])
        .write_stdin("x\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Only one of source and target"));
}

#[test]
fn json_format_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let (source, target) = write_pair(dir.path(), "same\n", "same\n");

    let output = filecompare(dir.path())
        .args(["compare", "--format", "json", &source, &target])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json_status(&output.stdout), "identical");

    let (source, target) = write_pair(dir.path(), "left\nsame\n", "right\nsame\n");
    let output = filecompare(dir.path())
        .args(["compare", "--format", "json", &source, &target])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json_status(&output.stdout), "differences");

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["line_number"], 1);
}

#[test]
fn line_command_prints_similarity() {
    let dir = tempfile::tempdir().unwrap();

    filecompare(dir.path())
        .args(["line", "--mode", "positional", "abc", "abd"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Line 1 (Source): abc"))
        .stdout(predicate::str::contains("similarity: 0.667"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}
