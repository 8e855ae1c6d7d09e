//! Configuration: optional TOML file, command-line overrides, question files.

mod loader;
mod types;

pub use loader::{load_question_bank, ConfigError};
pub use types::{AnimationConfig, Config, ConfigOverrides, LoggingConfig, QuizConfig};
