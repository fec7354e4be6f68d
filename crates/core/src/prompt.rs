//! Terminal port and the retry loop that drives field validators.
//!
//! Collectors never touch stdin/stdout directly. They go through a [`Terminal`], so a session
//! can be driven from a script in tests exactly as an operator would drive it.

use crate::error::{IntakeError, IntakeResult};
use crate::validation::ValidationError;
use intake_types::NonEmptyText;
use std::io::{BufRead, Write};

/// Line-oriented operator I/O.
pub trait Terminal {
    /// Show `prompt` and block until the operator submits one line. The returned text has its
    /// trailing newline removed.
    fn read_line(&mut self, prompt: &str) -> IntakeResult<String>;

    /// Show a line of text to the operator.
    fn say(&mut self, message: &str) -> IntakeResult<()>;
}

/// [`Terminal`] over any buffered reader and writer.
pub struct IoTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl IoTerminal<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for IoTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> IntakeResult<String> {
        write!(self.output, "{prompt}").map_err(IntakeError::TerminalWrite)?;
        self.output.flush().map_err(IntakeError::TerminalWrite)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(IntakeError::TerminalRead)?;
        if read == 0 {
            return Err(IntakeError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, message: &str) -> IntakeResult<()> {
        writeln!(self.output, "{message}").map_err(IntakeError::TerminalWrite)
    }
}

/// Ask for one field until `validate` accepts the stripped input.
///
/// Every rejection prints the validator's corrective message and asks again. There is no
/// retry limit; the loop only ends on acceptance, on a validator's own skip condition, or on a
/// terminal error.
pub fn ask<T, F>(term: &mut dyn Terminal, prompt: &str, validate: F) -> IntakeResult<T>
where
    F: Fn(&str) -> Result<T, ValidationError>,
{
    loop {
        let raw = term.read_line(prompt)?;
        match validate(raw.trim()) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(prompt, error = ?err, "input rejected");
                term.say(&err.to_string())?;
            }
        }
    }
}

/// Ask for a free-text field that may be left blank.
pub fn ask_text(term: &mut dyn Terminal, prompt: &str) -> IntakeResult<String> {
    Ok(term.read_line(prompt)?.trim().to_owned())
}

/// Collect entries one per line until the operator submits a blank line.
pub fn collect_list(term: &mut dyn Terminal, prompt: &str) -> IntakeResult<Vec<NonEmptyText>> {
    let mut entries = Vec::new();
    while let Ok(entry) = NonEmptyText::new(term.read_line(prompt)?) {
        entries.push(entry);
    }
    Ok(entries)
}

/// Print a section header framed by `=` rules.
pub fn header(term: &mut dyn Terminal, title: &str, width: usize) -> IntakeResult<()> {
    let rule = "=".repeat(width);
    term.say("")?;
    term.say(&rule)?;
    term.say(title)?;
    term.say(&rule)
}
