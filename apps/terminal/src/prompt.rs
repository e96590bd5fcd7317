//! # Prompt I/O
//!
//! Line-oriented console access for the session.
//!
//! Every prompt consumes exactly one line of input. The session is written
//! against [`Terminal`], which is generic over any `BufRead`/`Write` pair,
//! so tests drive it with in-memory buffers instead of a real console.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{SessionError, SessionResult};

/// A prompt/answer channel over an input and an output stream.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Prints `prompt` (no newline) and returns the next line, trimmed.
    ///
    /// ## Errors
    /// `SessionError::InputClosed` when the input has no more lines.
    pub fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        // Undecodable bytes simply fail to parse as a number later
        Ok(String::from_utf8_lossy(&self.line).trim().to_string())
    }

    /// Like [`Terminal::ask`], parsed as a signed integer.
    ///
    /// `Ok(None)` means a line was read but it is not a number.
    pub fn ask_integer(&mut self, prompt: &str) -> SessionResult<Option<i64>> {
        let answer = self.ask(prompt)?;
        Ok(parse_integer(&answer))
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> SessionResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Raw access for multi-line renderers.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn flush(&mut self) -> SessionResult<()> {
        self.output.flush()?;
        Ok(())
    }
}

/// Parses cashier input as a base-10 signed integer.
///
/// An optional leading `+` or `-` is accepted. Surrounding whitespace is
/// ignored. Anything else, including an empty line, is not a number.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
