mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "IDM_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".idm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "identity.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const MAX_CONNECTIONS_LIMIT: u32 = 64;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_TO_FILE: bool = false;
