//! Question variants and answer validation.
//!
//! [`Question`] is a closed set of formats. Every variant knows how to
//! render itself as terminal lines, which prompt to show before reading an
//! answer, how to validate a raw input line, and how to compare its
//! recorded answer with the correct one.
//!
//! The prompt/read loop itself lives in the application layer; this module
//! stays free of I/O.
//!
//! | Variant | Prompt | Accepted input |
//! |---------|--------|----------------|
//! | [`YesNoQuestion`] | `Enter your answer (y/n): ` | `y` / `n`, any case |
//! | [`PlaceholderQuestion`] | `Answer something, it doesn't matter:` | any line |
//! | [`ChoiceQuestion`] | `Enter your answer (1-N): ` | integer in `1..=N` |

pub mod choice;
pub mod placeholder;
pub mod yes_no;

pub use choice::ChoiceQuestion;
pub use placeholder::PlaceholderQuestion;
pub use yes_no::YesNoQuestion;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected answer input. The display text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAnswer {
    #[error("Invalid answer. Please enter 'y' or 'n'.")]
    NotYesNo,

    #[error("Invalid answer. Please enter a number between 1 and {max}.")]
    NotAChoice { max: usize },
}

/// Format of a question, used in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    Placeholder,
    Choice,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::YesNo => "yes_no",
            QuestionKind::Placeholder => "placeholder",
            QuestionKind::Choice => "choice",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single prompt-and-validate unit (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    YesNo(YesNoQuestion),
    Placeholder(PlaceholderQuestion),
    Choice(ChoiceQuestion),
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::YesNo(_) => QuestionKind::YesNo,
            Question::Placeholder(_) => QuestionKind::Placeholder,
            Question::Choice(_) => QuestionKind::Choice,
        }
    }

    /// Lines shown once, when the question is first displayed.
    pub fn header_lines(&self) -> Vec<String> {
        match self {
            Question::YesNo(q) => vec![q.prompt().to_string()],
            Question::Placeholder(_) => vec![PlaceholderQuestion::MESSAGE.to_string()],
            Question::Choice(q) => vec![q.prompt().to_string()],
        }
    }

    /// Lines shown before every answer prompt, including re-prompts.
    pub fn attempt_lines(&self) -> Vec<String> {
        match self {
            Question::Choice(q) => q.listing(),
            Question::YesNo(_) | Question::Placeholder(_) => Vec::new(),
        }
    }

    /// Text written right before reading an answer line.
    pub fn answer_prompt(&self) -> String {
        match self {
            Question::YesNo(_) => YesNoQuestion::ANSWER_PROMPT.to_string(),
            Question::Placeholder(_) => PlaceholderQuestion::ANSWER_PROMPT.to_string(),
            Question::Choice(q) => q.answer_prompt(),
        }
    }

    /// Validate a raw input line and record it as the answer.
    ///
    /// On error the previously recorded answer (if any) is left untouched.
    pub fn submit(&mut self, input: &str) -> Result<(), InvalidAnswer> {
        match self {
            Question::YesNo(q) => q.submit(input),
            Question::Placeholder(_) => Ok(()),
            Question::Choice(q) => q.submit(input),
        }
    }

    /// Compare the recorded answer with the correct one.
    ///
    /// Side-effect free; unanswered questions are only correct for
    /// [`PlaceholderQuestion`].
    pub fn check_answer(&self) -> bool {
        match self {
            Question::YesNo(q) => q.check_answer(),
            Question::Placeholder(q) => q.check_answer(),
            Question::Choice(q) => q.check_answer(),
        }
    }
}

impl From<YesNoQuestion> for Question {
    fn from(q: YesNoQuestion) -> Self {
        Question::YesNo(q)
    }
}

impl From<PlaceholderQuestion> for Question {
    fn from(q: PlaceholderQuestion) -> Self {
        Question::Placeholder(q)
    }
}

impl From<ChoiceQuestion> for Question {
    fn from(q: ChoiceQuestion) -> Self {
        Question::Choice(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answer_messages() {
        assert_eq!(
            InvalidAnswer::NotYesNo.to_string(),
            "Invalid answer. Please enter 'y' or 'n'."
        );
        assert_eq!(
            InvalidAnswer::NotAChoice { max: 4 }.to_string(),
            "Invalid answer. Please enter a number between 1 and 4."
        );
    }

    #[test]
    fn test_choice_rendering() {
        let q: Question =
            ChoiceQuestion::new("What do plants need for growth?", ["water", "food"], "water")
                .unwrap()
                .into();
        assert_eq!(q.header_lines(), vec!["What do plants need for growth?"]);
        assert_eq!(q.attempt_lines(), vec!["1. water", "2. food"]);
        assert_eq!(q.answer_prompt(), "Enter your answer (1-2): ");
        assert_eq!(q.kind(), QuestionKind::Choice);
    }

    #[test]
    fn test_yes_no_rendering() {
        let q: Question = YesNoQuestion::new("Is the sky blue?", true).unwrap().into();
        assert_eq!(q.header_lines(), vec!["Is the sky blue?"]);
        assert!(q.attempt_lines().is_empty());
        assert_eq!(q.answer_prompt(), "Enter your answer (y/n): ");
    }

    #[test]
    fn test_placeholder_accepts_anything() {
        let mut q: Question = PlaceholderQuestion::new().into();
        assert_eq!(q.header_lines(), vec!["This is a dumb question"]);
        assert_eq!(q.submit("whatever"), Ok(()));
        assert_eq!(q.submit(""), Ok(()));
        assert!(q.check_answer());
    }

    #[test]
    fn test_submit_dispatches_to_variant() {
        let mut q: Question = YesNoQuestion::new("Is 4-2=2", true).unwrap().into();
        assert_eq!(q.submit("maybe"), Err(InvalidAnswer::NotYesNo));
        assert!(!q.check_answer());
        q.submit("y").unwrap();
        assert!(q.check_answer());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionKind::YesNo).unwrap();
        assert_eq!(json, "\"yes_no\"");
    }
}
