//! Infrastructure layer for quiz questions
//!
//! This crate contains the adapters around the domain: configuration
//! file loading and `tracing` subscriber setup.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileQuestionConfig};
pub use logging::{filter_for_verbosity, init_tracing};
