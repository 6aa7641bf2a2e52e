//! Console output formatter for quiz reports

use crate::cli::commands::OutputFormat;
use colored::Colorize;
use quizrun_domain::{Quiz, QuizReport};
use tracing::warn;

/// Formats quiz reports and the quiz catalog for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every report as a pretty JSON array
    pub fn format_json(reports: &[QuizReport]) -> String {
        serde_json::to_string_pretty(reports).unwrap_or_else(|e| {
            warn!("Failed to serialize quiz reports: {}", e);
            "[]".to_string()
        })
    }

    /// What to print after the last results banner, if anything.
    ///
    /// [`OutputFormat::Text`] adds nothing so stdout stays the quiz transcript.
    pub fn format_trailer(format: OutputFormat, reports: &[QuizReport]) -> Option<String> {
        match format {
            OutputFormat::Text => None,
            OutputFormat::Summary => Some(Self::format_summary(reports)),
            OutputFormat::Json => Some(format!("{}\n", Self::format_json(reports))),
        }
    }

    /// One line per quiz plus the overall total
    pub fn format_summary(reports: &[QuizReport]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=== Summary ===".cyan().bold()));
        for report in reports {
            let score = format!("{}/{}", report.score, report.total);
            let score = if report.is_perfect() {
                score.green()
            } else {
                score.yellow()
            };
            output.push_str(&format!("  {} {}\n", score, report.title));
        }

        let score: usize = reports.iter().map(|r| r.score).sum();
        let total: usize = reports.iter().map(|r| r.total).sum();
        output.push_str(&format!(
            "{} {} out of {} across {} quizzes\n",
            "Overall:".bold(),
            score,
            total,
            reports.len()
        ));

        output
    }

    /// Listing for `--list`: name, question count and title
    pub fn format_catalog<'a>(entries: impl IntoIterator<Item = (&'a str, &'a Quiz)>) -> String {
        let mut output = String::new();
        for (name, quiz) in entries {
            output.push_str(&format!(
                "{:<10} {:>3} questions  {}\n",
                name.bold(),
                quiz.len(),
                quiz.title().dimmed()
            ));
        }
        output
    }
}
