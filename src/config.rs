//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup and validated before the
//! grading core runs anything.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_FILE_EXTENSION, DEFAULT_INTERPRETER, DEFAULT_RUN_TIMEOUT_MS, DEFAULT_SUBMIT_TIMEOUT_MS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub judge: JudgeConfig,
    pub rust_log: String,
}

/// Grading pipeline configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Interpreter binary used to run submitted code (must be on PATH)
    pub interpreter: String,
    /// Extension given to staged submission files
    pub file_extension: String,
    /// Directory for ephemeral submission files (must be writable)
    pub scratch_dir: PathBuf,
    /// Timeout for ad-hoc runs, in milliseconds
    pub run_timeout_ms: u64,
    /// Timeout per test case for scored submissions, in milliseconds
    pub submit_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            judge: JudgeConfig::from_env()?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            interpreter: env::var("JUDGE_INTERPRETER")
                .unwrap_or_else(|_| DEFAULT_INTERPRETER.to_string()),
            file_extension: env::var("JUDGE_FILE_EXTENSION")
                .unwrap_or_else(|_| DEFAULT_FILE_EXTENSION.to_string()),
            scratch_dir: env::var("JUDGE_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
            run_timeout_ms: env::var("JUDGE_RUN_TIMEOUT_MS")
                .unwrap_or_else(|_| DEFAULT_RUN_TIMEOUT_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_RUN_TIMEOUT_MS".to_string()))?,
            submit_timeout_ms: env::var("JUDGE_SUBMIT_TIMEOUT_MS")
                .unwrap_or_else(|_| DEFAULT_SUBMIT_TIMEOUT_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_SUBMIT_TIMEOUT_MS".to_string()))?,
        })
    }

    /// Timeout for ad-hoc runs
    pub fn run_timeout(&self) -> Duration {
        Duration::from_millis(self.run_timeout_ms)
    }

    /// Per-test timeout for scored submissions
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let judge = JudgeConfig {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            scratch_dir: env::temp_dir(),
            run_timeout_ms: DEFAULT_RUN_TIMEOUT_MS,
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
        };
        assert_eq!(judge.interpreter, "node");
        assert_eq!(judge.run_timeout(), Duration::from_millis(3_000));
        assert!(judge.submit_timeout() > judge.run_timeout());
    }
}
