//! Terminal port for line-oriented quiz I/O.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`Terminal`] - defined here in application layer
//! - **Adapter**: `ConsoleTerminal` - implemented in presentation layer over stdio
//!
//! # Built-in Implementations
//!
//! - `ScriptedTerminal` - replays a fixed list of input lines and records
//!   everything written; available in tests and with the `test-util` feature

use async_trait::async_trait;
#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;
use thiserror::Error;

/// Error type for terminal operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerminalError {
    /// The input stream reached end-of-file while an answer was expected.
    #[error("Input stream closed")]
    InputClosed,

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for the quiz's only external boundary: the user's terminal.
///
/// Implementations must preserve ordering: everything written before a
/// [`Terminal::prompt`] call is visible before the prompt blocks for input.
#[async_trait]
pub trait Terminal: Send {
    /// Write one line of text followed by a newline.
    async fn write_line(&mut self, line: &str) -> Result<(), TerminalError>;

    /// Write `prompt` (without a newline) and read one line of input.
    ///
    /// The returned line has its trailing line terminator removed.
    /// Returns [`TerminalError::InputClosed`] on end-of-input.
    async fn prompt(&mut self, prompt: &str) -> Result<String, TerminalError>;
}

/// Terminal that answers prompts from a scripted list of lines.
///
/// Once the script is exhausted every further prompt fails with
/// [`TerminalError::InputClosed`], like a closed stdin.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    output: String,
    prompts: Vec<String>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedTerminal {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: String::new(),
            prompts: Vec::new(),
        }
    }

    /// Everything written so far, prompts included
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Prompts shown, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of scripted lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(any(test, feature = "test-util"))]
#[async_trait]
impl Terminal for ScriptedTerminal {
    async fn write_line(&mut self, line: &str) -> Result<(), TerminalError> {
        self.output.push_str(line);
        self.output.push('\n');
        Ok(())
    }

    async fn prompt(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.output.push_str(prompt);
        self.prompts.push(prompt.to_string());
        let line = self.inputs.pop_front().ok_or(TerminalError::InputClosed)?;
        // Echo the answer the way a tty would.
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_terminal_replays_lines() {
        let mut terminal = ScriptedTerminal::new(["y", "2"]);
        terminal.write_line("Question?").await.unwrap();
        assert_eq!(terminal.prompt("> ").await.unwrap(), "y");
        assert_eq!(terminal.prompt(">> ").await.unwrap(), "2");
        assert_eq!(terminal.output(), "Question?\n> y\n>> 2\n");
        assert_eq!(terminal.prompts(), &["> ".to_string(), ">> ".to_string()]);
        assert_eq!(terminal.remaining(), 0);
    }

    #[tokio::test]
    async fn test_scripted_terminal_reports_closed_input() {
        let mut terminal = ScriptedTerminal::new(Vec::<String>::new());
        assert_eq!(
            terminal.prompt("> ").await,
            Err(TerminalError::InputClosed)
        );
    }
}
