//! Yes/no question variant

use super::InvalidAnswer;
use crate::core::error::DomainError;

/// A question answered with `y` or `n` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoQuestion {
    prompt: String,
    correct_answer: bool,
    answer: Option<bool>,
}

impl YesNoQuestion {
    pub const ANSWER_PROMPT: &'static str = "Enter your answer (y/n): ";

    /// Create a new yes/no question
    ///
    /// Fails with [`DomainError::EmptyPrompt`] if the prompt is blank.
    pub fn new(prompt: impl Into<String>, correct_answer: bool) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self {
            prompt,
            correct_answer,
            answer: None,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// The recorded answer, `None` until the question has been displayed
    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    /// Map a raw input line to a boolean answer.
    pub fn parse(input: &str) -> Result<bool, InvalidAnswer> {
        match input.trim().to_lowercase().as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err(InvalidAnswer::NotYesNo),
        }
    }

    pub fn submit(&mut self, input: &str) -> Result<(), InvalidAnswer> {
        self.answer = Some(Self::parse(input)?);
        Ok(())
    }

    pub fn check_answer(&self) -> bool {
        self.answer == Some(self.correct_answer)
    }
}
