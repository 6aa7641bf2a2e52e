//! Quiz report value objects

use crate::question::QuestionKind;
use serde::{Deserialize, Serialize};

/// Outcome of a single question within one quiz run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    /// 1-based position in the quiz
    pub index: usize,
    pub kind: QuestionKind,
    pub correct: bool,
    /// Lines rejected before the answer was accepted
    pub invalid_attempts: u32,
}

/// Result of one pass through a quiz (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome>,
}

impl QuizReport {
    pub fn new(title: impl Into<String>, score: usize, outcomes: Vec<QuestionOutcome>) -> Self {
        Self {
            title: title.into(),
            score,
            total: outcomes.len(),
            outcomes,
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }

    pub fn invalid_attempts(&self) -> u32 {
        self.outcomes.iter().map(|o| o.invalid_attempts).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(index: usize, correct: bool, invalid_attempts: u32) -> QuestionOutcome {
        QuestionOutcome {
            index,
            kind: QuestionKind::YesNo,
            correct,
            invalid_attempts,
        }
    }

    #[test]
    fn test_report_totals() {
        let report = QuizReport::new("Math", 1, vec![outcome(1, true, 2), outcome(2, false, 1)]);
        assert_eq!(report.total, 2);
        assert!(!report.is_perfect());
        assert_eq!(report.invalid_attempts(), 3);
    }

    #[test]
    fn test_report_json_shape() {
        let report = QuizReport::new("Math", 1, vec![outcome(1, true, 0)]);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 1);
        assert_eq!(json["total"], 1);
        assert_eq!(json["outcomes"][0]["kind"], "yes_no");
    }
}
