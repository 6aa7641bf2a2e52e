//! Built-in quizzes
//!
//! Quiz content is authored here, in code, and handed to the core by
//! `main`. Names are what `--quiz` accepts.

use anyhow::{Result, bail};
use quizrun_domain::{ChoiceQuestion, DomainError, PlaceholderQuestion, Quiz, YesNoQuestion};

const BIOLOGY_INTRO: &str = "Welcome to the Biology Quiz!

This quiz contains 10 questions about biology in two formats:
  1. Objective questions
  2. Multiple choice questions

Please spend no more than 10 minutes on this quiz.
---
";

const MATH_INTRO: &str = "Welcome to the Math Quiz!

This quiz contains 10 questions in the objective format.

Please spend no more than 10 minutes on this quiz.
---
";

fn biology() -> Result<Quiz, DomainError> {
    let mut quiz = Quiz::new(BIOLOGY_INTRO);
    quiz.add_question(ChoiceQuestion::new(
        "What do plants need for growth?",
        ["water/sunlight", "food", "coffee", "rain"],
        "water/sunlight",
    )?);
    quiz.add_question(YesNoQuestion::new("Is the sky blue?", true)?);
    Ok(quiz)
}

fn math() -> Result<Quiz, DomainError> {
    let mut quiz = Quiz::new(MATH_INTRO);
    quiz.add_question(YesNoQuestion::new("Is 1+1=2", true)?);
    quiz.add_question(YesNoQuestion::new("Is 4-2=2", true)?);
    quiz.add_question(PlaceholderQuestion::new());
    Ok(quiz)
}

/// All built-in quizzes, in default run order
pub fn all() -> Result<Vec<(&'static str, Quiz)>, DomainError> {
    Ok(vec![("biology", biology()?), ("math", math()?)])
}

/// Pick quizzes by name, keeping the order the names were given in.
///
/// An empty selection means every quiz.
pub fn select(
    catalog: Vec<(&'static str, Quiz)>,
    names: &[String],
) -> Result<Vec<(&'static str, Quiz)>> {
    if names.is_empty() {
        return Ok(catalog);
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let wanted = name.trim().to_lowercase();
        match catalog.iter().find(|(n, _)| *n == wanted) {
            Some((n, quiz)) => selected.push((*n, quiz.clone())),
            None => {
                let available: Vec<&str> = catalog.iter().map(|(n, _)| *n).collect();
                bail!(
                    "Unknown quiz '{}'. Available: {}",
                    name,
                    available.join(", ")
                );
            }
        }
    }
    Ok(selected)
}
