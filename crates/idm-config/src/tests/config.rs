use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.database.path.as_str(), eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_MAX_CONNECTIONS)
    );
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.logging.to_file, eq(false));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested/.idm");
    let _dir = EnvGuard::set("IDM_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [database]
              path = "data/users.db"
              max_connections = 10
              busy_timeout_secs = 2

              [logging]
              level = "debug"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path.as_str(), eq("data/users.db"));
    assert_that!(config.database.max_connections, eq(10));
    assert_that!(config.database.busy_timeout_secs, eq(2));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[database]\nmax_connections = 10",
    )
    .unwrap();
    let _max = EnvGuard::set("IDM_DATABASE_MAX_CONNECTIONS", "3");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.max_connections, eq(3));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("IDM_DATABASE_PATH", "other.db");
    let _level = EnvGuard::set("IDM_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("IDM_LOG_COLORED", "false");
    let _to_file = EnvGuard::set("IDM_LOG_TO_FILE", "1");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database.path.as_str(), eq("other.db"));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.to_file, eq(true));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("IDM_DATABASE_MAX_CONNECTIONS", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.database.max_connections,
        eq(crate::DEFAULT_MAX_CONNECTIONS)
    );
}

#[test]
#[serial]
fn given_invalid_log_level_when_load_then_falls_back_to_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[logging]\nlevel = \"loud\"").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_config_dir_env_unset_when_config_dir_then_defaults_to_cwd_idm() {
    // Given
    let _guard = EnvGuard::remove("IDM_CONFIG_DIR");

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert_that!(dir.ends_with(".idm"), eq(true));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[database\npath = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(crate::ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_loaded_config_when_resolving_paths_then_relative_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.database_path(temp.path()),
        eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME))
    );
    assert_that!(config.log_dir(temp.path()), eq(&temp.path().join("log")));
}
