use super::common::bin;
use predicates::prelude::*;

#[test]
fn reads_all_fields_from_stdin() {
    bin()
        .write_stdin("7\n1\n10\n")
        .assert()
        .code(0)
        .stdout("Password found in range\n")
        .stderr(predicate::str::contains("Password: Start: End: "));
}

#[test]
fn reads_only_missing_fields() {
    bin()
        .arg("7")
        .write_stdin("1\r\n5\r\n")
        .assert()
        .code(1)
        .stdout("Password not found in range\n")
        .stderr(predicate::str::contains("Start: End: "));
}

#[test]
fn closed_stdin_is_a_failure() {
    bin()
        .args(["7", "1"])
        .write_stdin("")
        .assert()
        .code(3)
        .stdout("")
        .stderr(
            "End: Application Error: collecting input: \
             Presentation error: Input ended before end was entered\n",
        );
}
