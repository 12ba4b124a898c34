use assert_cmd::Command;

/// The built binary with logging env cleared so stderr stays predictable.
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range_match"));
    cmd.env_remove("RANGE_MATCH_LOG")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}
