use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the bagcheck binary.
#[allow(deprecated)]
fn bagcheck_cmd() -> Command {
    Command::cargo_bin("bagcheck").unwrap()
}

#[test]
fn help_works() {
    bagcheck_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn check_help_lists_measurements() {
    bagcheck_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--length"))
        .stdout(predicate::str::contains("--weight"))
        .stdout(predicate::str::contains("--report-out"));
}

#[test]
fn check_requires_airline() {
    bagcheck_cmd()
        .args(["check", "--length", "55"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--airline"));
}
