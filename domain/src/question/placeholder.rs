//! Placeholder question variant
//!
//! Shows a fixed message, swallows one line of input and always scores.

/// A question without stored prompt or answer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderQuestion;

impl PlaceholderQuestion {
    pub const MESSAGE: &'static str = "This is a dumb question";
    pub const ANSWER_PROMPT: &'static str = "Answer something, it doesn't matter:";

    pub fn new() -> Self {
        Self
    }

    pub fn check_answer(&self) -> bool {
        true
    }
}
