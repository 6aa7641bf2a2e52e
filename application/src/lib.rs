//! Application layer for quizrun
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    progress::{NoProgress, QuizProgressNotifier},
    terminal::{Terminal, TerminalError},
};
#[cfg(any(test, feature = "test-util"))]
pub use ports::terminal::ScriptedTerminal;
pub use use_cases::display_question::{DisplayError, DisplayOutcome, QuestionDisplay};
pub use use_cases::run_quiz::{RESULTS_BANNER, RunQuizError, RunQuizUseCase};
