//! Domain error types

use crate::question::value_objects::ChoiceId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid title: length {length} is outside 1..={max} characters")]
    InvalidTitle { length: usize, max: usize },

    #[error("Invalid choice text: length {length} is outside 1..={max} characters")]
    InvalidChoiceText { length: usize, max: usize },

    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    #[error("Too many selections: {selected} given, at most {max} allowed")]
    TooManySelections { selected: usize, max: usize },

    #[error("Invalid max_selections: must be at least 1")]
    InvalidMaxSelections,
}

impl DomainError {
    /// Check if this error was caused by invalid input text
    pub fn is_text_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidTitle { .. } | DomainError::InvalidChoiceText { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_not_found_display() {
        let error = DomainError::ChoiceNotFound(ChoiceId::new(999));
        assert_eq!(error.to_string(), "Choice not found: 999");
    }

    #[test]
    fn test_too_many_selections_display() {
        let error = DomainError::TooManySelections {
            selected: 2,
            max: 1,
        };
        assert_eq!(
            error.to_string(),
            "Too many selections: 2 given, at most 1 allowed"
        );
    }

    #[test]
    fn test_is_text_error_check() {
        assert!(DomainError::InvalidTitle { length: 0, max: 200 }.is_text_error());
        assert!(DomainError::InvalidChoiceText { length: 101, max: 100 }.is_text_error());
        assert!(!DomainError::InvalidMaxSelections.is_text_error());
        assert!(!DomainError::ChoiceNotFound(ChoiceId::new(1)).is_text_error());
    }
}
