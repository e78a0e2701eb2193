//! Tests for config file loading

use super::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_yields_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(&dir.path().join("nope.toml")));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config("[api]\ncatalog_limit = 151\n");
    let result = load_config(Some(file.path()));

    assert_eq!(result.config.api.catalog_limit, 151);
    assert_eq!(result.config.api.base_url, DEFAULT_BASE_URL);
    assert!(result.warning.is_none());
}

#[test]
fn test_invalid_file_yields_defaults_with_warning() {
    let file = write_config("[api\nbase_url = ");
    let result = load_config(Some(file.path()));

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("warning for invalid file");
    assert!(warning.starts_with("Invalid config file"));
}

#[test]
fn test_directory_path_yields_io_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(dir.path()));

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("warning for unreadable path");
    assert!(warning.starts_with("Failed to read config file"));
}

#[test]
fn test_default_config_path_location() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with(".config/pokedex/config.toml"));
    }
}
