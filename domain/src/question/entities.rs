//! Question domain entities
//!
//! A [`Question`] owns an ordered list of [`Choice`]s. Choices can only be
//! created through [`Question::add_choice`] and only destroyed through the
//! question's removal methods.

use super::limits::QuestionLimits;
use super::value_objects::{ChoiceId, QuestionId};
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// One answer option belonging to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// Input for creating a [`Question`]
///
/// Unset fields fall back to the defaults of the [`QuestionLimits`] the
/// question is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub points: Option<u32>,
    pub max_selections: Option<usize>,
}

impl NewQuestion {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: None,
            max_selections: None,
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = Some(max_selections);
        self
    }
}

/// A single quiz prompt (Entity)
///
/// Holds a title, a point value, a selection cap and an ordered collection
/// of choices. A live `Question` always has a title within the configured
/// length and a `max_selections` of at least 1.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    /// Last choice id handed out; only ever grows.
    next_choice_id: u64,
    limits: QuestionLimits,
}

impl Question {
    /// Create a question with default points and selection cap.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        Self::create(NewQuestion::new(title))
    }

    /// Create a question under the default [`QuestionLimits`].
    pub fn create(input: NewQuestion) -> Result<Self, DomainError> {
        Self::create_with_limits(input, QuestionLimits::default())
    }

    /// Create a question validated against the given limits.
    ///
    /// # Errors
    /// - [`DomainError::InvalidTitle`] if the title is empty or too long
    /// - [`DomainError::InvalidMaxSelections`] if `max_selections` is 0
    pub fn create_with_limits(
        input: NewQuestion,
        limits: QuestionLimits,
    ) -> Result<Self, DomainError> {
        let length = input.title.chars().count();
        if length == 0 || length > limits.max_title_chars() {
            return Err(DomainError::InvalidTitle {
                length,
                max: limits.max_title_chars(),
            });
        }

        let max_selections = input
            .max_selections
            .unwrap_or(limits.default_max_selections());
        if max_selections == 0 {
            return Err(DomainError::InvalidMaxSelections);
        }

        Ok(Self {
            id: QuestionId::generate(),
            title: input.title,
            points: input.points.unwrap_or(limits.default_points()),
            max_selections,
            choices: Vec::new(),
            next_choice_id: 0,
            limits,
        })
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in insertion order
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn limits(&self) -> &QuestionLimits {
        &self.limits
    }

    /// Look up a choice by id
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Ids of the choices currently marked correct, in choice order
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }

    // ==================== Mutations ====================

    /// Append a new choice and return it.
    ///
    /// The new choice gets the next id in this question's sequence. Ids of
    /// removed choices are never handed out again.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, DomainError> {
        let text = text.into();
        let length = text.chars().count();
        let max = self.limits.max_choice_text_chars();
        if length == 0 || length > max {
            return Err(DomainError::InvalidChoiceText { length, max });
        }

        self.next_choice_id += 1;
        let id = ChoiceId::new(self.next_choice_id);
        debug!(question = %self.id, choice = %id, is_correct, "Added choice");

        let index = self.choices.len();
        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });
        Ok(&self.choices[index])
    }

    /// Remove the choice with the given id, keeping the order of the rest.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<Choice, DomainError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id == id)
            .ok_or(DomainError::ChoiceNotFound(id))?;

        debug!(question = %self.id, choice = %id, "Removed choice");
        Ok(self.choices.remove(index))
    }

    /// Remove every choice. The id sequence keeps counting from where it was.
    pub fn remove_all_choices(&mut self) {
        debug!(question = %self.id, removed = self.choices.len(), "Removed all choices");
        self.choices.clear();
    }

    /// Evaluate a selection attempt.
    ///
    /// Returns the selected ids that name an existing, correct choice, in
    /// the order they were given. Unknown ids are dropped silently. The
    /// `max_selections` cap is checked against the raw input length.
    pub fn select_choices(&self, ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, DomainError> {
        if ids.len() > self.max_selections {
            warn!(
                question = %self.id,
                selected = ids.len(),
                max = self.max_selections,
                "Rejected selection"
            );
            return Err(DomainError::TooManySelections {
                selected: ids.len(),
                max: self.max_selections,
            });
        }

        Ok(ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect())
    }

    /// Replace the correctness flags: exactly the given ids become correct.
    ///
    /// Ids that match no choice are ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        let correct: HashSet<ChoiceId> = ids.iter().copied().collect();
        for choice in &mut self.choices {
            choice.is_correct = correct.contains(&choice.id);
        }
        debug!(question = %self.id, correct = correct.len(), "Replaced correct choices");
    }
}
