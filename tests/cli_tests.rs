//! CLI tests for the pathignore binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_check_reports_verdicts() {
    Command::cargo_bin("pathignore")
        .unwrap()
        .args(&[
            "check",
            "-p",
            "dist/**",
            "-p",
            "!dist/keep.txt",
            "dist/keep.txt",
            "dist/other.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept\tdist/keep.txt"))
        .stdout(predicate::str::contains("ignored\tdist/other.txt"));
}

#[test]
fn test_check_json_output() {
    let output = Command::cargo_bin("pathignore")
        .unwrap()
        .args(&["check", "--json", "-p", "**/node_modules/**", "../../node_modules/pkg/index.js"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["path"], "../../node_modules/pkg/index.js");
    assert_eq!(results[0]["ignored"], true);
}

#[test]
fn test_dirs_prints_directory_patterns() {
    Command::cargo_bin("pathignore")
        .unwrap()
        .args(&["dirs", "-p", "build/**/*", "-p", "ios/Pods/", "-p", "*.log"])
        .assert()
        .success()
        .stdout(predicate::eq("build\nios/Pods\n"));
}

#[test]
fn test_dirs_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ignore.toml");
    fs::write(&config_path, "patterns = [\"build/**/*\", \"!build/keep/file.txt\"]\n").unwrap();

    Command::cargo_bin("pathignore")
        .unwrap()
        .args(&["dirs", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_pattern_fails() {
    Command::cargo_bin("pathignore")
        .unwrap()
        .args(&["check", "-p", "bad**glob", "file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad**glob"));
}
