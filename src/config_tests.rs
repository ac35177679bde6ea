//! Tests for config

use super::*;
use std::io::Write;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (temp_dir, path)
}

#[test]
fn test_config_path_ends_with_app_dir() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("scroll-dispatch/config.toml")
            || path_str.ends_with("scroll-dispatch\\config.toml"),
        "Config path should end with scroll-dispatch/config.toml, got: {}",
        path_str
    );
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(&temp_dir.path().join("nope.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let (_dir, path) = write_config(
        r#"
[dispatch]
quiet_period_ms = 250
trigger_percentage = 85.5

[feed]
page_size = 12
initial_pages = 3
"#,
    );

    let result = load_config_from(&path);
    assert!(result.warning.is_none());
    assert_eq!(result.config.dispatch.quiet_period_ms, 250);
    assert_eq!(result.config.dispatch.trigger_percentage, 85.5);
    assert_eq!(result.config.feed.page_size, 12);
    assert_eq!(result.config.feed.initial_pages, 3);
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let (_dir, path) = write_config("[dispatch\nquiet_period_ms = 10");

    let result = load_config_from(&path);
    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.starts_with("Invalid config"), "got: {}", warning);
}

#[test]
fn test_wrong_type_falls_back_with_warning() {
    let (_dir, path) = write_config("[feed]\npage_size = \"lots\"");

    let result = load_config_from(&path);
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_read_config_reports_unreadable_path() {
    let temp_dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file
    let err = read_config(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ScrollDispatchError::ConfigRead { .. }));
    assert!(err.to_string().starts_with("Failed to read config"));
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    let temp_dir = TempDir::new().unwrap();

    let result = load_config_from(temp_dir.path());
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}
