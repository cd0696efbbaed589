//! The console seam.
//!
//! Every prompt and every printed line goes through [`Console`]. The binary
//! uses [`IoConsole`] over stdin/stdout; tests use
//! [`ScriptedConsole`](crate::mock::ScriptedConsole).

use std::io::{self, BufRead, Write};

use anyhow::Result;

// ---------------------------------------------------------------------------
// Console trait
// ---------------------------------------------------------------------------

/// Line-oriented, blocking console.
pub trait Console {
    /// Write text without a trailing newline.
    fn print(&mut self, text: &str) -> Result<()>;

    /// Write text followed by a newline.
    fn println(&mut self, text: &str) -> Result<()> {
        self.print(text)?;
        self.print("\n")
    }

    /// Read one line without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// Reader/writer backed console
// ---------------------------------------------------------------------------

/// A [`Console`] over any buffered reader and writer.
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn print(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        // Prompts have no newline, so flush every write.
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
