// src/presentation.rs
use std::io::Write;

use atty::Stream;
use range_match_shared_kernel::{Outcome, PresentationResult, Tint};
use serde::Serialize;

use crate::config::Config;
use crate::options::{ColorChoice, OutputFormat};

/// Shape of `--format json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    message: &'a str,
    color: Tint,
    verdict: &'static str,
    value: Option<i64>,
}

impl<'a> From<&'a Outcome> for JsonReport<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        Self {
            message: &outcome.message,
            color: outcome.color,
            verdict: outcome.verdict.as_str(),
            value: outcome.verdict.value(),
        }
    }
}

/// Resolves `--color` against the terminal and `NO_COLOR`.
pub fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()) && atty::is(Stream::Stdout)
        }
    }
}

pub fn print_outcome(outcome: &Outcome, config: &Config) -> PresentationResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_outcome(&mut out, outcome, config.format, use_color(config.color))?;
    out.flush()?;
    Ok(())
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    format: OutputFormat,
    colored: bool,
) -> PresentationResult<()> {
    match format {
        OutputFormat::Text => write_text(out, outcome, colored),
        OutputFormat::Json => write_json(out, outcome),
    }
}

fn write_text<W: Write>(out: &mut W, outcome: &Outcome, colored: bool) -> PresentationResult<()> {
    if colored {
        writeln!(
            out,
            "\x1B[{}m{}\x1B[0m",
            outcome.color.ansi_code(),
            outcome.message
        )?;
    } else {
        writeln!(out, "{}", outcome.message)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, outcome: &Outcome) -> PresentationResult<()> {
    serde_json::to_writer(&mut *out, &JsonReport::from(outcome))?;
    writeln!(out)?;
    Ok(())
}
