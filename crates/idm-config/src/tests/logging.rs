use crate::{LogLevel, LoggingConfig};

use std::str::FromStr;

use googletest::prelude::*;
use log::LevelFilter;

#[test]
fn test_log_level_names_are_case_insensitive() {
    assert_that!(LogLevel::parse_or_default("TRACE"), eq(LogLevel(LevelFilter::Trace)));
    assert_that!(LogLevel::parse_or_default(" off "), eq(LogLevel(LevelFilter::Off)));
    assert_eq!(LogLevel::from_str("Error"), Ok(LogLevel(LevelFilter::Error)));
}

#[test]
fn test_unknown_log_level_defaults_to_info() {
    assert_that!(LogLevel::parse_or_default("verbose"), eq(LogLevel(LevelFilter::Info)));
}

#[test]
fn given_file_logging_without_dir_when_validate_then_error() {
    let config = LoggingConfig {
        dir: String::new(),
        to_file: true,
        ..LoggingConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_console_logging_without_dir_when_validate_then_ok() {
    let config = LoggingConfig {
        dir: String::new(),
        ..LoggingConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}
