//! Error types for configuration loading

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid question limits: {}", .0.join("; "))]
    InvalidLimits(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_limits_display_joins_messages() {
        let error = ConfigError::InvalidLimits(vec![
            "question: max_title_chars must be >= 1".to_string(),
            "question: default_max_selections must be >= 1".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "Invalid question limits: question: max_title_chars must be >= 1; \
             question: default_max_selections must be >= 1"
        );
    }
}
