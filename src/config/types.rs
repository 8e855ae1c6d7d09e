use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Question source and navigation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// TOML file with `[[questions]]` tables. Built-in questions when absent.
    #[serde(default)]
    pub questions: Option<PathBuf>,
    /// Refuse to advance past a question with no answer (default: true).
    #[serde(default = "default_require_answer")]
    pub require_answer: bool,
}

/// Score reveal animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Milliseconds between score increments (default: 20).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file, appended to. Logging is discarded when absent since the
    /// terminal belongs to the quiz.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_require_answer() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: None,
            require_answer: default_require_answer(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub questions: Option<PathBuf>,
    pub tick_ms: Option<u64>,
    pub allow_unanswered: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(questions) = overrides.questions {
            self.quiz.questions = Some(questions);
        }
        if let Some(tick_ms) = overrides.tick_ms {
            self.animation.tick_ms = tick_ms;
        }
        if overrides.allow_unanswered {
            self.quiz.require_answer = false;
        }
        if let Some(log_file) = overrides.log_file {
            self.logging.file = Some(log_file);
        }
    }
}
