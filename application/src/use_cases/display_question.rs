//! Display-question use case
//!
//! Shows one question through the [`Terminal`] port and loops until a valid
//! answer is recorded on it.

use crate::config::BehaviorConfig;
use crate::ports::terminal::{Terminal, TerminalError};
use async_trait::async_trait;
use quizrun_domain::Question;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can end a question's answer loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Gave up after {attempts} invalid answers")]
    TooManyInvalidAnswers { attempts: u32 },

    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

/// Result of a completed display step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOutcome {
    /// Lines rejected before the accepted one
    pub invalid_attempts: u32,
}

/// Interactive display for questions.
///
/// The flow for one question:
///
/// ```text
/// header lines (once)
///        ↓
/// attempt lines + answer prompt ←──┐
///        ↓                         │
/// submit(line) ── invalid ── error message
///        ↓
///     recorded
/// ```
#[async_trait]
pub trait QuestionDisplay {
    /// Present the question and record the first valid answer.
    async fn display(
        &mut self,
        terminal: &mut dyn Terminal,
        behavior: &BehaviorConfig,
    ) -> Result<DisplayOutcome, DisplayError>;
}

#[async_trait]
impl QuestionDisplay for Question {
    async fn display(
        &mut self,
        terminal: &mut dyn Terminal,
        behavior: &BehaviorConfig,
    ) -> Result<DisplayOutcome, DisplayError> {
        for line in self.header_lines() {
            terminal.write_line(&line).await?;
        }

        let mut invalid_attempts = 0;
        loop {
            for line in self.attempt_lines() {
                terminal.write_line(&line).await?;
            }

            let input = terminal.prompt(&self.answer_prompt()).await?;
            match self.submit(&input) {
                Ok(()) => return Ok(DisplayOutcome { invalid_attempts }),
                Err(invalid) => {
                    invalid_attempts += 1;
                    debug!(
                        kind = %self.kind(),
                        attempt = invalid_attempts,
                        "Rejected answer {:?}",
                        input
                    );
                    terminal.write_line(&invalid.to_string()).await?;

                    if behavior.exceeds_cap(invalid_attempts) {
                        warn!("Giving up after {} invalid answers", invalid_attempts);
                        return Err(DisplayError::TooManyInvalidAnswers {
                            attempts: invalid_attempts,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::terminal::ScriptedTerminal;
    use quizrun_domain::{ChoiceQuestion, PlaceholderQuestion, YesNoQuestion};

    fn yes_no(correct: bool) -> Question {
        YesNoQuestion::new("Is the sky blue?", correct).unwrap().into()
    }

    fn abc() -> Question {
        ChoiceQuestion::new("Pick one", ["a", "b", "c"], "c")
            .unwrap()
            .into()
    }

    #[tokio::test]
    async fn test_valid_yes_no_inputs_accept_first_line() {
        for (input, expected) in [("y", true), ("Y", true), ("n", false), ("N", false)] {
            let mut question = yes_no(true);
            let mut terminal = ScriptedTerminal::new([input, "leftover"]);

            let outcome = question
                .display(&mut terminal, &BehaviorConfig::default())
                .await
                .unwrap();

            assert_eq!(outcome.invalid_attempts, 0);
            assert_eq!(terminal.prompts().len(), 1);
            assert_eq!(terminal.remaining(), 1);
            assert_eq!(question.check_answer(), expected);
        }
    }

    #[tokio::test]
    async fn test_yes_no_reprompts_once_per_invalid_line() {
        let mut question = yes_no(false);
        let mut terminal = ScriptedTerminal::new(["maybe", "", "yes", "n"]);

        let outcome = question
            .display(&mut terminal, &BehaviorConfig::default())
            .await
            .unwrap();

        assert_eq!(outcome.invalid_attempts, 3);
        assert_eq!(terminal.prompts().len(), 4);
        assert!(
            terminal
                .prompts()
                .iter()
                .all(|p| p == "Enter your answer (y/n): ")
        );
        assert_eq!(
            terminal
                .output()
                .matches("Invalid answer. Please enter 'y' or 'n'.\n")
                .count(),
            3
        );
        assert_eq!(terminal.output().matches("Is the sky blue?").count(), 1);
        assert!(question.check_answer());
    }

    #[tokio::test]
    async fn test_choice_records_choice_text() {
        for (input, expected) in [("1", false), ("2", false), ("3", true)] {
            let mut question = abc();
            let mut terminal = ScriptedTerminal::new([input]);
            question
                .display(&mut terminal, &BehaviorConfig::default())
                .await
                .unwrap();
            assert_eq!(question.check_answer(), expected);
        }
    }

    #[tokio::test]
    async fn test_choice_rejects_out_of_range_and_relists() {
        let mut question = abc();
        let mut terminal = ScriptedTerminal::new(["0", "4", "abc", "3"]);

        let outcome = question
            .display(&mut terminal, &BehaviorConfig::default())
            .await
            .unwrap();

        assert_eq!(outcome.invalid_attempts, 3);
        let output = terminal.output();
        assert_eq!(
            output
                .matches("Invalid answer. Please enter a number between 1 and 3.\n")
                .count(),
            3
        );
        assert_eq!(output.matches("1. a\n2. b\n3. c\n").count(), 4);
        assert_eq!(output.matches("Pick one\n").count(), 1);
        assert!(output.starts_with("Pick one\n1. a\n2. b\n3. c\nEnter your answer (1-3): 0\n"));
        assert!(question.check_answer());
    }

    #[tokio::test]
    async fn test_placeholder_consumes_one_line() {
        let mut question: Question = PlaceholderQuestion::new().into();
        let mut terminal = ScriptedTerminal::new(["anything at all", "next"]);

        question
            .display(&mut terminal, &BehaviorConfig::default())
            .await
            .unwrap();

        assert_eq!(
            terminal.output(),
            "This is a dumb question\nAnswer something, it doesn't matter:anything at all\n"
        );
        assert_eq!(terminal.remaining(), 1);
        assert!(question.check_answer());
    }

    #[tokio::test]
    async fn test_check_answer_is_idempotent_after_display() {
        let mut question = yes_no(true);
        let mut terminal = ScriptedTerminal::new(["y"]);
        question
            .display(&mut terminal, &BehaviorConfig::default())
            .await
            .unwrap();
        assert_eq!(question.check_answer(), question.check_answer());
        assert_eq!(terminal.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_closed_input_is_reported() {
        let mut question = yes_no(true);
        let mut terminal = ScriptedTerminal::new(["x"]);

        let err = question
            .display(&mut terminal, &BehaviorConfig::default())
            .await
            .unwrap_err();

        assert_eq!(err, DisplayError::Terminal(TerminalError::InputClosed));
    }

    #[tokio::test]
    async fn test_attempt_cap_is_enforced() {
        let mut question = yes_no(true);
        let mut terminal = ScriptedTerminal::new(["a", "b", "y"]);

        let err = question
            .display(&mut terminal, &BehaviorConfig::with_max_invalid_attempts(1))
            .await
            .unwrap_err();

        assert_eq!(err, DisplayError::TooManyInvalidAnswers { attempts: 2 });
        assert_eq!(terminal.remaining(), 1);
    }
}
