//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave.

/// Application behavior configuration.
///
/// Controls how the answer loop treats repeated invalid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Invalid answers tolerated per question before giving up.
    ///
    /// `None` re-prompts until a valid answer arrives.
    pub max_invalid_attempts: Option<u32>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig that gives up after `attempts` invalid answers.
    pub fn with_max_invalid_attempts(attempts: u32) -> Self {
        Self {
            max_invalid_attempts: Some(attempts),
        }
    }

    /// Creates a BehaviorConfig from an optional cap.
    ///
    /// If `attempts` is `None`, re-prompting is unbounded.
    pub fn from_max_invalid_attempts(attempts: Option<u32>) -> Self {
        Self {
            max_invalid_attempts: attempts,
        }
    }

    /// Whether `invalid_attempts` rejected lines exceed the configured cap
    pub fn exceeds_cap(&self, invalid_attempts: u32) -> bool {
        self.max_invalid_attempts
            .is_some_and(|max| invalid_attempts > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = BehaviorConfig::default();
        assert!(!config.exceeds_cap(u32::MAX));
    }

    #[test]
    fn test_cap_allows_exactly_max() {
        let config = BehaviorConfig::with_max_invalid_attempts(2);
        assert!(!config.exceeds_cap(2));
        assert!(config.exceeds_cap(3));
        assert_eq!(
            BehaviorConfig::from_max_invalid_attempts(Some(2)),
            config
        );
    }

    #[test]
    fn test_zero_cap_rejects_first_invalid_answer() {
        assert!(BehaviorConfig::with_max_invalid_attempts(0).exceeds_cap(1));
    }
}
