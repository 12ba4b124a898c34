// src/app.rs
use std::io::{BufRead, Write};
use std::process::ExitCode;

use range_match_core::check;
use range_match_shared_kernel::{ErrorContext, Outcome, Result, Verdict};
use tracing::info;

use crate::config::Config;
use crate::presentation;
use crate::prompt::fill_form;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_NOT_FOUND: u8 = 1;
pub const EXIT_INVALID_RANGE: u8 = 2;
pub const EXIT_FAILURE: u8 = 3;

pub const fn exit_status(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Found(_) => EXIT_FOUND,
        Verdict::NotFound => EXIT_NOT_FOUND,
        Verdict::InvalidRange => EXIT_INVALID_RANGE,
    }
}

pub fn exit_code(verdict: Verdict) -> ExitCode {
    ExitCode::from(exit_status(verdict))
}

/// Collects the form (prompting for gaps) and runs the check.
pub fn evaluate<R, W>(config: &Config, input: &mut R, prompt_out: &mut W) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let form = fill_form(config, input, prompt_out).context("collecting input")?;
    let outcome = check(&form);
    info!(verdict = %outcome.verdict, color = %outcome.color, "check complete");
    Ok(outcome)
}

/// Binary entry: stdin for prompts, stderr for prompt labels, stdout for the result.
pub fn run_stdio(config: &Config) -> Result<Verdict> {
    let outcome = if config.is_complete() {
        evaluate(config, &mut std::io::empty(), &mut std::io::sink())?
    } else {
        let stdin = std::io::stdin();
        let stderr = std::io::stderr();
        evaluate(config, &mut stdin.lock(), &mut stderr.lock())?
    };

    presentation::print_outcome(&outcome, config).context("printing result")?;
    Ok(outcome.verdict)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use range_match_shared_kernel::Tint;

    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn prompted_form_is_checked() {
        let config = Config::default();
        let mut input = Cursor::new(b"5\n1\n10\n".to_vec());
        let mut prompts = Vec::new();

        let outcome = evaluate(&config, &mut input, &mut prompts).unwrap();
        assert_eq!(outcome.verdict, Verdict::Found(5));
        assert_eq!(outcome.color, Tint::Green);
    }

    #[test]
    fn closed_input_is_an_error_not_a_verdict() {
        let config = ConfigBuilder::default()
            .password(Some("5".to_string()))
            .build()
            .unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut prompts = Vec::new();

        let err = evaluate(&config, &mut input, &mut prompts).unwrap_err();
        assert!(err.to_string().starts_with("collecting input: "));
    }

    #[test]
    fn exit_codes_follow_verdict() {
        assert_eq!(exit_status(Verdict::Found(1)), EXIT_FOUND);
        assert_eq!(exit_status(Verdict::NotFound), EXIT_NOT_FOUND);
        assert_eq!(exit_status(Verdict::InvalidRange), EXIT_INVALID_RANGE);
    }
}
