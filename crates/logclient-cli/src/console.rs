use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal wrapper used by the interactive session
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.yellow())
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.red())
    }

    /// Prints `text` without a newline and reads the reply
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator; `None` once input is closed
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let trimmed = buf.trim_end_matches(&['\r', '\n'][..]).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}
