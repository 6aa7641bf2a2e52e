//! Progress notification port
//!
//! Defines the interface for reporting progress while a quiz runs.

use quizrun_domain::{QuestionOutcome, QuizReport};

/// Callback for progress updates during a quiz run
///
/// Implementations live in the presentation layer. Indices are 1-based.
pub trait QuizProgressNotifier: Send + Sync {
    /// Called once, before the intro is shown
    fn on_quiz_start(&self, title: &str, total_questions: usize);

    /// Called before a question is displayed
    fn on_question_start(&self, index: usize, total_questions: usize);

    /// Called after a question's answer has been checked
    fn on_question_complete(&self, outcome: &QuestionOutcome);

    /// Called after the results banner
    fn on_quiz_complete(&self, _report: &QuizReport) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {
    fn on_quiz_start(&self, _title: &str, _total_questions: usize) {}
    fn on_question_start(&self, _index: usize, _total_questions: usize) {}
    fn on_question_complete(&self, _outcome: &QuestionOutcome) {}
}
