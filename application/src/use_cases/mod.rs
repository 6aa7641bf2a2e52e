//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod display_question;
pub mod run_quiz;
