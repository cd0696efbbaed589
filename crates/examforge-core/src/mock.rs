//! Scripted console for testing.

use std::collections::VecDeque;

use anyhow::Result;

use crate::traits::Console;

/// A console that replays a fixed list of input lines and records output.
///
/// Reading past the end of the script returns `None`, the same as a closed
/// stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    /// Lines still to be read.
    input: VecDeque<String>,
    /// Everything printed so far.
    output: String,
    /// Number of `read_line` calls made.
    reads: usize,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
            reads: 0,
        }
    }

    /// A console with no input at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of `read_line` calls made, including ones that hit the end.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.reads += 1;
        Ok(self.input.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_lines_in_order() {
        let mut console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(console.remaining(), 1);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.reads(), 3);
    }

    #[test]
    fn records_output() {
        let mut console = ScriptedConsole::empty();
        console.print("x").unwrap();
        console.println("y").unwrap();
        assert_eq!(console.output(), "xy\n");
        assert_eq!(console.reads(), 0);
    }
}
