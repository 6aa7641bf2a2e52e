//! Presentation-level configuration
//!
//! Configuration for colored output and progress display.

use crate::cli::commands::Cli;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show per-question progress headers
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: false,
        }
    }
}

impl From<&Cli> for OutputConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            color: !cli.no_color,
            show_progress: cli.progress,
        }
    }
}
