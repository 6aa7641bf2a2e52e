//! Quiz entity

use crate::question::Question;

/// An ordered collection of questions plus an intro and a running score
/// (Aggregate Root)
///
/// Insertion order is display order. The score only moves through
/// [`Quiz::record_result`] and [`Quiz::reset_score`], so during a run it
/// never decreases.
#[derive(Debug, Clone)]
pub struct Quiz {
    intro: String,
    questions: Vec<Question>,
    score: usize,
}

impl Quiz {
    pub fn new(intro: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
            questions: Vec::new(),
            score: 0,
        }
    }

    /// Append a question. Its internal consistency was already checked when
    /// the variant was constructed.
    pub fn add_question(&mut self, question: impl Into<Question>) {
        self.questions.push(question.into());
    }

    /// Builder form of [`Quiz::add_question`]
    pub fn with_question(mut self, question: impl Into<Question>) -> Self {
        self.add_question(question);
        self
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    /// First non-blank line of the intro, used as a short title
    pub fn title(&self) -> &str {
        self.intro
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Add one point for a correct answer, nothing otherwise.
    pub fn record_result(&mut self, correct: bool) {
        if correct {
            self.score += 1;
        }
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// `Your score is {score} out of {total}`
    pub fn score_line(&self) -> String {
        format!("Your score is {} out of {}", self.score, self.questions.len())
    }
}
