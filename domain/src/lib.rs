//! Domain layer for quizrun
//!
//! This crate contains the question model, the quiz aggregate and the
//! report value objects. It has no dependencies on terminal I/O or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A closed set of formats sharing one contract: render, validate a raw
//! answer line, and check the recorded answer.
//!
//! - **Yes/no**: `y` or `n`, case-insensitive
//! - **Choice**: pick one of N listed choices by number
//! - **Placeholder**: accepts anything, always correct
//!
//! ## Quiz
//!
//! An intro, an ordered list of questions and a running score.

pub mod core;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use question::{
    ChoiceQuestion, InvalidAnswer, PlaceholderQuestion, Question, QuestionKind, YesNoQuestion,
};
pub use quiz::{
    entities::Quiz,
    report::{QuestionOutcome, QuizReport},
};
