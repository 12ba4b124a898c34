use super::common::bin;
use predicates::prelude::*;

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("range_match"));
}

#[test]
fn found_in_range() {
    bin()
        .args(["5", "1", "10"])
        .assert()
        .code(0)
        .stdout("Password found in range\n");
}

#[test]
fn leading_zero_is_not_found() {
    bin()
        .args(["05", "1", "10"])
        .assert()
        .code(1)
        .stdout("Password not found in range\n");
}

#[test]
fn non_numeric_start_is_invalid() {
    bin()
        .args(["5", "a", "10"])
        .assert()
        .code(2)
        .stdout("Invalid range\n");
}

#[test]
fn reversed_range_is_not_found() {
    bin()
        .args(["5", "10", "1"])
        .assert()
        .code(1)
        .stdout("Password not found in range\n");
}

#[test]
fn negative_range() {
    bin()
        .args(["-5", "-10", "0"])
        .assert()
        .code(0)
        .stdout("Password found in range\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    bin()
        .args(["-vv", "5", "1", "10"])
        .assert()
        .code(0)
        .stdout("Password found in range\n")
        .stderr(predicate::str::contains("scanning range"))
        .stderr(predicate::str::contains("scan finished"));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_failure() {
    bin()
        .args(["--bogus", "5", "1", "10"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn extra_positional_is_a_usage_failure() {
    bin()
        .args(["5", "1", "10", "extra"])
        .assert()
        .code(3)
        .stdout("");
}

#[test]
fn dashed_password_after_separator() {
    bin()
        .args(["--", "-abc", "1", "10"])
        .assert()
        .code(1)
        .stdout("Password not found in range\n");
}

#[test]
fn dashed_password_without_separator_is_rejected() {
    bin()
        .args(["-abc", "1", "10"])
        .write_stdin("")
        .assert()
        .code(3)
        .stdout("");
}
