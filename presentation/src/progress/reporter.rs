//! Progress reporting for quiz runs
//!
//! Written to stderr so stdout carries only the quiz transcript.

use colored::Colorize;
use quizrun_application::ports::progress::QuizProgressNotifier;
use quizrun_domain::{QuestionOutcome, QuizReport};

/// Prints a dim header before each question and a short recap at the end
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }

    fn question_header(index: usize, total_questions: usize) -> String {
        format!("Question {} of {}", index, total_questions)
    }

    fn recap(report: &QuizReport) -> String {
        let mut recap = format!("{}/{} correct", report.score, report.total);
        let invalid = report.invalid_attempts();
        if invalid > 0 {
            recap.push_str(&format!(", {} invalid answers", invalid));
        }
        recap
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for ConsoleProgress {
    fn on_quiz_start(&self, title: &str, total_questions: usize) {
        eprintln!(
            "{} {}",
            title.cyan().bold(),
            format!("({} questions)", total_questions).dimmed()
        );
    }

    fn on_question_start(&self, index: usize, total_questions: usize) {
        eprintln!("{}", Self::question_header(index, total_questions).dimmed());
    }

    fn on_question_complete(&self, outcome: &QuestionOutcome) {
        let mark = if outcome.correct {
            "v".green()
        } else {
            "x".red()
        };
        eprintln!("{} {}", mark, format!("question {}", outcome.index).dimmed());
    }

    fn on_quiz_complete(&self, report: &QuizReport) {
        let recap = Self::recap(report);
        if report.is_perfect() {
            eprintln!("{}", recap.green().bold());
        } else {
            eprintln!("{}", recap.yellow());
        }
    }
}
