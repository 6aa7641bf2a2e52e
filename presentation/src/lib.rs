//! Presentation layer for quizrun
//!
//! This crate contains the CLI definition, the console terminal adapter,
//! output formatters and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod terminal;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleProgress;
pub use terminal::console::ConsoleTerminal;
