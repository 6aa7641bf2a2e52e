//! Console terminal adapter
//!
//! Implements the [`Terminal`] port over any tokio buffered reader and
//! writer. [`ConsoleTerminal::stdio`] wires it to the process's stdin and
//! stdout.

use async_trait::async_trait;
use quizrun_application::ports::terminal::{Terminal, TerminalError};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Line-oriented terminal over an async reader/writer pair.
///
/// # Example
///
/// ```ignore
/// let mut terminal = ConsoleTerminal::stdio();
/// let report = RunQuizUseCase::default()
///     .execute(&mut quiz, &mut terminal)
///     .await?;
/// ```
pub struct ConsoleTerminal<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleTerminal<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R, W> ConsoleTerminal<R, W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_flushed(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        self.writer
            .write_all(bytes)
            .await
            .map_err(|e| TerminalError::Io(format!("Failed to write output: {}", e)))?;
        self.writer
            .flush()
            .await
            .map_err(|e| TerminalError::Io(format!("Failed to flush output: {}", e)))
    }
}

#[async_trait]
impl<R, W> Terminal for ConsoleTerminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write_line(&mut self, line: &str) -> Result<(), TerminalError> {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
        self.write_flushed(&bytes).await
    }

    async fn prompt(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.write_flushed(prompt.as_bytes()).await?;

        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| TerminalError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(TerminalError::InputClosed);
        }

        // Undecodable bytes become U+FFFD so the line is rejected as an answer.
        let input = String::from_utf8_lossy(&buf);
        Ok(input.trim_end_matches(['\n', '\r']).to_string())
    }
}
