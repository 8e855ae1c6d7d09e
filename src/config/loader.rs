use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;
use crate::quiz::{QuestionBank, QuestionFile, QuizError};

/// Errors that can occur when loading configuration or questions.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Invalid questions in '{path}': {source}")]
    InvalidQuestions {
        path: PathBuf,
        #[source]
        source: QuizError,
    },
}

const MAX_TICK_MS: u64 = 1000;

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pawquiz/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pawquiz").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `animation.tick_ms` is between 1 and 1000
    /// - `logging.level` is a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick_ms = self.animation.tick_ms;
        if tick_ms == 0 || tick_ms > MAX_TICK_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "animation.tick_ms must be between 1 and {}, got {}",
                    MAX_TICK_MS, tick_ms
                ),
            });
        }

        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError {
                message: format!("logging.level '{}' is invalid: {}", self.logging.level, err),
            });
        }

        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.animation.tick_ms)
    }

    /// The configured question file, or the built-in questions.
    pub fn question_bank(&self) -> Result<Arc<QuestionBank>, ConfigError> {
        match &self.quiz.questions {
            Some(path) => load_question_bank(path).map(Arc::new),
            None => Ok(Arc::new(QuestionBank::default())),
        }
    }
}

/// Reads a `[[questions]]` TOML file and validates it into a bank.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank, ConfigError> {
    let content = read(path)?;
    let file: QuestionFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    QuestionBank::new(file.questions).map_err(|e| ConfigError::InvalidQuestions {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}
