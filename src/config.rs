//! Scheduler configuration.
//!
//! Loaded from a TOML file with environment variable overrides.
//!
//! ```toml
//! seed = 42
//! log_level = "debug"
//! output = "out/exam_schedule.txt"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::export::EXPORT_FILE_NAME;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchedulerConfig {
    /// Fixed seed for the course shuffle and program draw.
    /// `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Export destination
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Unparsable `EXAM_SCHEDULE_SEED` value, reported by `validate`
    #[serde(skip)]
    invalid_seed: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: default_log_level(),
            output: default_output(),
            invalid_seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `exam-schedule.toml` in the working directory,
    /// or return the default config
    pub fn load_or_default() -> Self {
        Self::load(Path::new("exam-schedule.toml")).unwrap_or_default()
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("EXAM_SCHEDULE_SEED") {
            match seed.parse() {
                Ok(value) => {
                    self.seed = Some(value);
                    self.invalid_seed = None;
                }
                Err(_) => self.invalid_seed = Some(seed),
            }
        }

        if let Ok(log_level) = std::env::var("EXAM_SCHEDULE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(output) = std::env::var("EXAM_SCHEDULE_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(seed) = &self.invalid_seed {
            errors.push(format!(
                "Invalid seed '{}'. Must be an unsigned 64-bit integer",
                seed
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.output.as_os_str().is_empty() {
            errors.push("output cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
