//! Question limits configuration from TOML (`[question]` section)

use crate::config::error::ConfigError;
use quiz_domain::{ConfigIssue, ConfigIssueCode, QuestionLimits, Severity};
use serde::{Deserialize, Serialize};

/// Question limits configuration from TOML.
///
/// # Example
///
/// ```toml
/// [question]
/// max_title_chars = 200
/// max_choice_text_chars = 100
/// default_points = 1
/// default_max_selections = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionConfig {
    /// Longest accepted question title, in characters.
    pub max_title_chars: usize,
    /// Longest accepted choice text, in characters.
    pub max_choice_text_chars: usize,
    /// Points for questions created without an explicit value.
    pub default_points: u32,
    /// Selection cap for questions created without an explicit value.
    pub default_max_selections: usize,
}

impl Default for FileQuestionConfig {
    fn default() -> Self {
        let limits = QuestionLimits::default();
        Self {
            max_title_chars: limits.max_title_chars(),
            max_choice_text_chars: limits.max_choice_text_chars(),
            default_points: limits.default_points(),
            default_max_selections: limits.default_max_selections(),
        }
    }
}

impl FileQuestionConfig {
    /// Convert to domain `QuestionLimits`, returning validation issues.
    ///
    /// If the values violate constraints, falls back to `QuestionLimits::default()`
    /// and returns warnings describing the issues.
    pub fn to_limits(&self) -> (QuestionLimits, Vec<ConfigIssue>) {
        match self.build_limits() {
            Ok(limits) => (limits, vec![]),
            Err(errors) => {
                let issues = errors
                    .into_iter()
                    .map(|msg| ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::InvalidConstraint {
                            field: "question".to_string(),
                        },
                        message: msg,
                    })
                    .collect();
                (QuestionLimits::default(), issues)
            }
        }
    }

    /// Convert to domain `QuestionLimits`, failing on any invalid value.
    pub fn try_to_limits(&self) -> Result<QuestionLimits, ConfigError> {
        self.build_limits().map_err(ConfigError::InvalidLimits)
    }

    fn build_limits(&self) -> Result<QuestionLimits, Vec<String>> {
        QuestionLimits::try_new(
            self.max_title_chars,
            self.max_choice_text_chars,
            self.default_points,
            self.default_max_selections,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_config_default() {
        let config = FileQuestionConfig::default();
        assert_eq!(config.max_title_chars, 200);
        assert_eq!(config.max_choice_text_chars, 100);
        assert_eq!(config.default_points, 1);
        assert_eq!(config.default_max_selections, 1);
    }

    #[test]
    fn test_question_config_deserialize() {
        let toml_str = r#"
[question]
max_title_chars = 80
default_points = 5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.question.max_title_chars, 80);
        assert_eq!(config.question.default_points, 5);
        // Unset fields keep their defaults
        assert_eq!(config.question.max_choice_text_chars, 100);
        assert_eq!(config.question.default_max_selections, 1);
    }

    #[test]
    fn test_question_config_to_domain() {
        let config = FileQuestionConfig {
            max_title_chars: 80,
            ..Default::default()
        };
        let (limits, issues) = config.to_limits();
        assert!(issues.is_empty());
        assert_eq!(limits.max_title_chars(), 80);
    }

    #[test]
    fn test_question_config_validation_falls_back_to_default() {
        let config = FileQuestionConfig {
            max_title_chars: 0,
            max_choice_text_chars: 100,
            default_points: 1,
            default_max_selections: 0,
        };
        let (limits, issues) = config.to_limits();
        assert_eq!(issues.len(), 2);
        assert!(
            issues
                .iter()
                .all(|i| matches!(&i.code, ConfigIssueCode::InvalidConstraint { .. }))
        );
        assert_eq!(limits, QuestionLimits::default());
    }

    #[test]
    fn test_try_to_limits_rejects_invalid_values() {
        let config = FileQuestionConfig {
            max_choice_text_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.try_to_limits(),
            Err(ConfigError::InvalidLimits(errors)) if errors.len() == 1
        ));
    }
}
