//! Identifier resolution for the CLI: positional argument first, then an
//! interactive prompt that repeats until something non-blank is typed.

use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const PROMPT: &str = "Enter Pokémon name or ID: ";

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before a non-blank line was read.
    #[error("no input provided")]
    NoInput,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Return the trimmed `arg` when it is non-blank, otherwise prompt on
/// `output` and read lines from `input` until one is non-blank.
///
/// There is no attempt limit; only end of input stops the loop.
pub fn resolve_identifier<R: BufRead, W: Write>(
    arg: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<String, PromptError> {
    if let Some(a) = arg.map(str::trim).filter(|a| !a.is_empty()) {
        return Ok(a.to_string());
    }
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::NoInput);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}
