//! Domain error types

use thiserror::Error;

/// Domain-level errors raised when building questions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question prompt cannot be empty")]
    EmptyPrompt,

    #[error("Choice question needs at least one choice")]
    EmptyChoices,

    #[error("Correct answer '{answer}' is not one of the choices")]
    CorrectAnswerNotInChoices { answer: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyChoices.to_string(),
            "Choice question needs at least one choice"
        );
        assert_eq!(
            DomainError::CorrectAnswerNotInChoices {
                answer: "rain".to_string()
            }
            .to_string(),
            "Correct answer 'rain' is not one of the choices"
        );
    }
}
