use roster::config::{Config, ConfigError, MAX_TICK_RATE_MS};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.ui.show_debug_panel);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("roster/config.toml"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_sections_fill_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
show_debug_panel = false

[logging]
level = "roster=debug"
file = "/tmp/roster-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(!config.ui.show_debug_panel);
    assert_eq!(config.logging.level, "roster=debug");
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/roster-test.log")
    );
}

#[test]
fn test_default_log_file_path() {
    let config = Config::default();
    assert!(config.logging.file_path().ends_with("roster/roster.log"));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = \"fast\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_tick_rate_out_of_range_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));

    let mut config = Config::default();
    config.ui.tick_rate_ms = MAX_TICK_RATE_MS + 1;
    assert!(config.validate().is_err());
}

#[test]
fn test_bad_log_level_fails_validation() {
    let mut config = Config::default();
    config.logging.level = "roster=notalevel".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("logging.level"));
}
