//! Line-oriented console I/O.

use crate::error::{Result, SessionError};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

/// Prompts and messages over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Show `message` and read one line, without its line ending.
    ///
    /// End of input is an error.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::UnexpectedEof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt for an integer. Anything else is fatal.
    ///
    /// Integers too large for `i64` saturate rather than fail.
    pub fn prompt_number(&mut self, message: &str) -> Result<i64> {
        let line = self.prompt(message)?;
        match line.trim().parse::<i64>() {
            Ok(n) => Ok(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(SessionError::InvalidNumber { input: line }),
            },
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
