//! Run Quiz use case
//!
//! Orchestrates one pass through a quiz: intro, every question in order,
//! then the results banner.

use crate::config::BehaviorConfig;
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use crate::ports::terminal::{Terminal, TerminalError};
use crate::use_cases::display_question::{DisplayError, QuestionDisplay};
use quizrun_domain::{QuestionOutcome, Quiz, QuizReport};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const RESULTS_BANNER: &str = "=== Results ===";

/// Errors that can occur while running a quiz
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunQuizError {
    #[error("Input closed while answering question {question}")]
    InputClosed { question: usize },

    #[error("Question {question}: gave up after {attempts} invalid answers")]
    TooManyInvalidAnswers { question: usize, attempts: u32 },

    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),
}

impl RunQuizError {
    fn from_display(error: DisplayError, question: usize) -> Self {
        match error {
            DisplayError::TooManyInvalidAnswers { attempts } => {
                RunQuizError::TooManyInvalidAnswers { question, attempts }
            }
            DisplayError::Terminal(TerminalError::InputClosed) => {
                RunQuizError::InputClosed { question }
            }
            DisplayError::Terminal(e) => RunQuizError::Terminal(e),
        }
    }
}

/// Use case for running a quiz against a terminal
///
/// Every run starts from a zero score, so running the same quiz twice
/// produces two independent reports instead of an accumulated total.
#[derive(Debug, Clone, Default)]
pub struct RunQuizUseCase {
    behavior: BehaviorConfig,
}

impl RunQuizUseCase {
    pub fn new(behavior: BehaviorConfig) -> Self {
        Self { behavior }
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        quiz: &mut Quiz,
        terminal: &mut dyn Terminal,
    ) -> Result<QuizReport, RunQuizError> {
        self.execute_with_progress(quiz, terminal, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        quiz: &mut Quiz,
        terminal: &mut dyn Terminal,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<QuizReport, RunQuizError> {
        let total = quiz.len();
        quiz.reset_score();

        info!("Starting quiz '{}' with {} questions", quiz.title(), total);
        progress.on_quiz_start(quiz.title(), total);

        terminal.write_line(quiz.intro()).await?;

        let mut outcomes = Vec::with_capacity(total);
        for index in 1..=total {
            progress.on_question_start(index, total);

            let question = &mut quiz.questions_mut()[index - 1];
            let displayed = question
                .display(terminal, &self.behavior)
                .await
                .map_err(|e| {
                    warn!("Question {} aborted: {}", index, e);
                    RunQuizError::from_display(e, index)
                })?;
            terminal.write_line("").await?;

            let outcome = QuestionOutcome {
                index,
                kind: question.kind(),
                correct: question.check_answer(),
                invalid_attempts: displayed.invalid_attempts,
            };
            debug!(
                index,
                kind = %outcome.kind,
                correct = outcome.correct,
                "Question answered"
            );

            quiz.record_result(outcome.correct);
            progress.on_question_complete(&outcome);
            outcomes.push(outcome);
        }

        terminal.write_line(RESULTS_BANNER).await?;
        terminal.write_line(&quiz.score_line()).await?;
        terminal.write_line("").await?;

        let report = QuizReport::new(quiz.title(), quiz.score(), outcomes);
        info!(
            "Quiz '{}' finished: {}/{}",
            report.title, report.score, report.total
        );
        progress.on_quiz_complete(&report);

        Ok(report)
    }
}
