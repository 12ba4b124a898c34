use super::common::bin;
use serde_json::Value;

fn json_for(args: &[&str]) -> Value {
    let output = bin()
        .args(["--format", "json"])
        .args(args)
        .output()
        .expect("binary runs");
    serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output")
}

#[test]
fn json_found() {
    let json = json_for(&["5", "1", "10"]);
    assert_eq!(json["message"], "Password found in range");
    assert_eq!(json["color"], "green");
    assert_eq!(json["verdict"], "found");
    assert_eq!(json["value"], 5);
}

#[test]
fn json_invalid_range() {
    let json = json_for(&["5", "1", "x"]);
    assert_eq!(json["message"], "Invalid range");
    assert_eq!(json["color"], "red");
    assert_eq!(json["verdict"], "invalid_range");
    assert!(json["value"].is_null());
}

#[test]
fn forced_color_wraps_message() {
    bin()
        .args(["--color", "always", "05", "1", "10"])
        .assert()
        .code(1)
        .stdout("\x1B[31mPassword not found in range\x1B[0m\n");
}

#[test]
fn piped_output_is_uncolored_by_default() {
    bin()
        .args(["5", "1", "10"])
        .assert()
        .stdout("Password found in range\n");
}
