//! CLI surface tests for treescribe

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn treescribe_cmd() -> Command {
    Command::cargo_bin("treescribe").unwrap()
}

#[test]
fn help_shows_usage_and_flags() {
    treescribe_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Write the current directory's tree to a text or Markdown file",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("--color"));
}

#[test]
fn version_flag_succeeds() {
    treescribe_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treescribe"));
}

#[test]
fn unrecognized_flag_shows_error() {
    treescribe_cmd()
        .arg("--unknown-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("--unknown-flag"));
}

#[test]
fn extra_positional_argument_is_rejected() {
    treescribe_cmd()
        .args(["one.txt", "two.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn runs_against_the_current_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("test.txt"), "content").unwrap();

    treescribe_cmd()
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project tree saved to"));

    let content = fs::read_to_string(temp.path().join("project-structure.txt")).unwrap();
    assert!(content.contains("test.txt"));
}

#[test]
fn color_never_is_accepted() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("test.txt"), "content").unwrap();

    treescribe_cmd()
        .args(["--color", "never"])
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project tree saved to"));
}

#[test]
fn color_rejects_unknown_value() {
    treescribe_cmd()
        .args(["--color", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
