//! Question domain value objects - identifiers for questions and choices.
//!
//! # Identifiers
//! - [`QuestionId`] - Process-wide unique identifier for a question
//! - [`ChoiceId`] - Sequential identifier for a choice within its question

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of question ids. Starts at 1 and is never reset.
static NEXT_QUESTION_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a question.
///
/// Ids are handed out from a process-wide counter, so no two questions
/// created in the same process ever share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Generates the next unused QuestionId.
    pub fn generate() -> Self {
        Self(NEXT_QUESTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a choice, unique within the owning question.
///
/// Choices are numbered 1, 2, 3, ... in the order they are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceId(u64);

impl ChoiceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChoiceId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_question_ids_are_distinct() {
        let a = QuestionId::generate();
        let b = QuestionId::generate();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }

    #[test]
    fn test_choice_id_from_u64() {
        let id: ChoiceId = 7.into();
        assert_eq!(id, ChoiceId::new(7));
        assert_eq!(id.value(), 7);
        assert_eq!(id.to_string(), "7");
    }
}
