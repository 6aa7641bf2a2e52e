//! Multiple-choice question variant

use super::InvalidAnswer;
use crate::core::error::DomainError;

/// A question answered by picking one of a fixed list of choices.
///
/// Choices are shown 1-indexed. The recorded answer is the choice text,
/// not the index, so it is compared to `correct_answer` by string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuestion {
    prompt: String,
    choices: Vec<String>,
    correct_answer: String,
    answer: Option<String>,
}

impl ChoiceQuestion {
    /// Create a new multiple-choice question
    ///
    /// # Errors
    /// - [`DomainError::EmptyPrompt`] if the prompt is blank
    /// - [`DomainError::EmptyChoices`] if no choices are given
    /// - [`DomainError::CorrectAnswerNotInChoices`] if the correct answer
    ///   is not one of the choices
    pub fn new<I, S>(
        prompt: impl Into<String>,
        choices: I,
        correct_answer: impl Into<String>,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }

        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.is_empty() {
            return Err(DomainError::EmptyChoices);
        }

        let correct_answer = correct_answer.into();
        if !choices.contains(&correct_answer) {
            return Err(DomainError::CorrectAnswerNotInChoices {
                answer: correct_answer,
            });
        }

        Ok(Self {
            prompt,
            choices,
            correct_answer,
            answer: None,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// The recorded choice text, `None` until the question has been displayed
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// `"{i}. {choice}"` for every choice, starting at 1
    pub fn listing(&self) -> Vec<String> {
        self.choices
            .iter()
            .enumerate()
            .map(|(i, choice)| format!("{}. {}", i + 1, choice))
            .collect()
    }

    pub fn answer_prompt(&self) -> String {
        format!("Enter your answer (1-{}): ", self.choices.len())
    }

    /// Parse a raw input line into a zero-based choice index.
    pub fn parse(&self, input: &str) -> Result<usize, InvalidAnswer> {
        let max = self.choices.len();
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => Ok(n - 1),
            _ => Err(InvalidAnswer::NotAChoice { max }),
        }
    }

    pub fn submit(&mut self, input: &str) -> Result<(), InvalidAnswer> {
        let index = self.parse(input)?;
        self.answer = Some(self.choices[index].clone());
        Ok(())
    }

    pub fn check_answer(&self) -> bool {
        self.answer.as_deref() == Some(self.correct_answer.as_str())
    }
}
