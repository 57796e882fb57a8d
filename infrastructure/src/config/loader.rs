//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use quiz_domain::QuestionLimits;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["quiz.toml", ".quiz.toml"];

/// Prefix for `[question]` overrides from the environment
const QUESTION_ENV_PREFIX: &str = "QUIZ_QUESTION_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `QUIZ_QUESTION_*` (e.g. `QUIZ_QUESTION_MAX_TITLE_CHARS`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quiz.toml` or `./.quiz.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Loading project config from {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            debug!("Loading explicit config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(QUESTION_ENV_PREFIX)
                .map(|key| format!("question.{}", key.as_str().to_ascii_lowercase()).into()),
        );

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load configuration and convert it to domain limits
    ///
    /// Invalid limit values are logged and replaced by the defaults.
    pub fn load_limits(config_path: Option<&Path>) -> Result<QuestionLimits, ConfigError> {
        let config = Self::load(config_path)?;
        let (limits, issues) = config.question.to_limits();
        for issue in &issues {
            warn!("{}", issue);
        }
        Ok(limits)
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quiz/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quiz").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}
