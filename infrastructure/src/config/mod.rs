//! Configuration loading for quiz questions
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_QUESTION_*` environment variables
//! 2. Explicitly passed config file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quiz/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{FileConfig, FileQuestionConfig};
pub use loader::ConfigLoader;
