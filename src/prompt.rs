// src/prompt.rs
use std::io::{BufRead, Write};

use range_match_shared_kernel::{CheckForm, PresentationError, PresentationResult};

use crate::config::Config;

/// Builds the form from the config, reading each missing field from `input`.
///
/// Prompts go to `prompt_out` (stderr in the binary) so stdout carries only
/// the result.
pub fn fill_form<R, W>(
    config: &Config,
    input: &mut R,
    prompt_out: &mut W,
) -> PresentationResult<CheckForm>
where
    R: BufRead,
    W: Write,
{
    let password = field_or_prompt(config.password.as_deref(), "Password", input, prompt_out)?;
    let start = field_or_prompt(config.start.as_deref(), "Start", input, prompt_out)?;
    let end = field_or_prompt(config.end.as_deref(), "End", input, prompt_out)?;
    Ok(CheckForm::new(password, start, end))
}

fn field_or_prompt<R, W>(
    given: Option<&str>,
    label: &str,
    input: &mut R,
    prompt_out: &mut W,
) -> PresentationResult<String>
where
    R: BufRead,
    W: Write,
{
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    write!(prompt_out, "{label}: ")?;
    prompt_out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| PresentationError::PromptRead {
            field: label.to_ascii_lowercase(),
            source,
        })?;
    if read == 0 {
        return Err(PresentationError::PromptEof {
            field: label.to_ascii_lowercase(),
        });
    }

    Ok(strip_line_ending(line))
}

/// Drops one trailing `\n` or `\r\n`; all other whitespace is kept.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
