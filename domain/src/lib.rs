//! Domain layer for quiz questions
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure concerns.
//!
//! # Core Concepts
//!
//! - **Question**: a quiz prompt with a title, a point value, a selection cap
//!   and an ordered list of choices
//! - **Choice**: one answer option, carrying text and a correctness flag
//! - **Selection**: a list of choice ids submitted as an answer, checked
//!   against the question's selection cap and filtered to correct choices
//!
//! # Example
//!
//! ```
//! use quiz_domain::{NewQuestion, Question};
//!
//! let mut question = Question::create(NewQuestion::new("q1").with_max_selections(2)).unwrap();
//! let right = question.add_choice("a", true).unwrap().id();
//! let wrong = question.add_choice("b", false).unwrap().id();
//!
//! assert_eq!(question.select_choices(&[right, wrong]).unwrap(), vec![right]);
//! ```

pub mod config;
pub mod core;
pub mod question;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use crate::core::error::DomainError;
pub use question::{
    entities::{Choice, NewQuestion, Question},
    limits::QuestionLimits,
    value_objects::{ChoiceId, QuestionId},
};
