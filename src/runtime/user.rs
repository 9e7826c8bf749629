//! User interaction operations (confirmation prompts).

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::RealRuntime;

/// Write `prompt` to `output` and read one answer line from `input`.
///
/// Only "y" or "yes" (any case, surrounding whitespace ignored) confirm.
/// End of input counts as a refusal.
pub(crate) fn confirm_with_io<I: BufRead, W: Write>(
    prompt: &str,
    input: &mut I,
    output: &mut W,
) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

impl RealRuntime {
    pub(crate) fn confirm_impl(&self, prompt: &str) -> Result<bool> {
        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout();
        confirm_with_io(prompt, &mut stdin, &mut stdout)
    }
}
