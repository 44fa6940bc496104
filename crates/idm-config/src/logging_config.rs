use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY,
    DEFAULT_LOG_LEVEL, DEFAULT_LOG_TO_FILE, LogLevel,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Relative to the config directory, used when `to_file` is set.
    pub dir: String,
    pub colored: bool,
    pub to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            colored: DEFAULT_LOG_COLORED,
            to_file: DEFAULT_LOG_TO_FILE,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.to_file && self.dir.trim().is_empty() {
            return Err(ConfigError::logging(
                "logging.dir cannot be empty when logging.to_file is set",
            ));
        }

        Ok(())
    }
}
