//! Question domain - multiple-choice quiz questions.
//!
//! - [`entities::Question`] — a quiz prompt owning its choices
//! - [`entities::Choice`] — one answer option
//! - [`limits::QuestionLimits`] — title/choice limits and creation defaults
//! - [`value_objects`] — question and choice identifiers

pub mod entities;
pub mod limits;
pub mod value_objects;
