//! Limits that question validation runs against.
//!
//! [`QuestionLimits`] carries the character limits for titles and choice
//! texts, plus the defaults applied when a question is created without
//! explicit `points` or `max_selections`.

use serde::{Deserialize, Serialize};

/// Maximum title length, in characters.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 200;
/// Maximum choice text length, in characters.
pub const DEFAULT_MAX_CHOICE_TEXT_CHARS: usize = 100;
/// Points awarded when none are given.
pub const DEFAULT_POINTS: u32 = 1;
/// Selection cap when none is given.
pub const DEFAULT_MAX_SELECTIONS: usize = 1;

/// Validation limits and creation defaults for questions.
///
/// Four knobs:
/// - `max_title_chars`: longest accepted title
/// - `max_choice_text_chars`: longest accepted choice text
/// - `default_points`: points used when a question doesn't specify any
/// - `default_max_selections`: selection cap used when a question doesn't specify one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLimits {
    max_title_chars: usize,
    max_choice_text_chars: usize,
    default_points: u32,
    default_max_selections: usize,
}

impl QuestionLimits {
    /// Create limits with explicit values, without validation.
    pub fn new(
        max_title_chars: usize,
        max_choice_text_chars: usize,
        default_points: u32,
        default_max_selections: usize,
    ) -> Self {
        Self {
            max_title_chars,
            max_choice_text_chars,
            default_points,
            default_max_selections,
        }
    }

    /// Create limits, returning every violated rule if the values are unusable.
    pub fn try_new(
        max_title_chars: usize,
        max_choice_text_chars: usize,
        default_points: u32,
        default_max_selections: usize,
    ) -> Result<Self, Vec<String>> {
        let limits = Self::new(
            max_title_chars,
            max_choice_text_chars,
            default_points,
            default_max_selections,
        );
        let issues = limits.validate();
        if issues.is_empty() {
            Ok(limits)
        } else {
            Err(issues)
        }
    }

    // ==================== Accessors ====================

    pub fn max_title_chars(&self) -> usize {
        self.max_title_chars
    }

    pub fn max_choice_text_chars(&self) -> usize {
        self.max_choice_text_chars
    }

    pub fn default_points(&self) -> u32 {
        self.default_points
    }

    pub fn default_max_selections(&self) -> usize {
        self.default_max_selections
    }

    // ==================== Validation ====================

    /// Validate these limits, returning a list of issues.
    ///
    /// Rules:
    /// - `max_title_chars >= 1`
    /// - `max_choice_text_chars >= 1`
    /// - `default_max_selections >= 1`
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.max_title_chars < 1 {
            issues.push("question: max_title_chars must be >= 1".to_string());
        }
        if self.max_choice_text_chars < 1 {
            issues.push("question: max_choice_text_chars must be >= 1".to_string());
        }
        if self.default_max_selections < 1 {
            issues.push("question: default_max_selections must be >= 1".to_string());
        }
        issues
    }
}

impl Default for QuestionLimits {
    /// Default: 200-char titles, 100-char choices, 1 point, 1 selection.
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_TITLE_CHARS,
            DEFAULT_MAX_CHOICE_TEXT_CHARS,
            DEFAULT_POINTS,
            DEFAULT_MAX_SELECTIONS,
        )
    }
}
