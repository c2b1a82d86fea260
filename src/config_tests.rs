//! Tests for config

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert!(config.filter.multiple);
}

#[test]
fn test_parse_clipboard_backends() {
    for (name, expected) in [
        ("auto", ClipboardBackend::Auto),
        ("system", ClipboardBackend::System),
        ("osc52", ClipboardBackend::Osc52),
    ] {
        let toml = format!("[clipboard]\nbackend = \"{}\"\n", name);
        let config: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.clipboard.backend, expected);
    }
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    assert_eq!(config.filter.modifier, ModifierKey::Control);
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));

    assert!(result.warning.is_none());
    assert!(result.config.filter.searchable);
}

#[test]
fn test_valid_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[filter]\nmultiple = false\nmodifier = \"alt\"").unwrap();

    let result = load_config_from(file.path());
    assert!(result.warning.is_none());
    assert!(!result.config.filter.multiple);
    assert_eq!(result.config.filter.modifier, ModifierKey::Alt);
}

#[test]
fn test_malformed_file_returns_defaults_with_warning() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[filter\nmultiple = false").unwrap();

    let result = load_config_from(file.path());
    assert!(result.config.filter.multiple);
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config"));
}

#[test]
fn test_invalid_value_returns_defaults_with_warning() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[filter]\nmodifier = \"hyper\"").unwrap();

    let result = load_config_from(file.path());
    assert_eq!(result.config.filter.modifier, ModifierKey::Control);
    assert!(result.warning.is_some());
}

#[test]
fn test_config_path_is_stable() {
    let path = get_config_path();
    assert_eq!(path, get_config_path());

    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("hyfi/config.toml") || path_str.ends_with("hyfi\\config.toml"),
        "Config path should end with hyfi/config.toml, got: {}",
        path_str
    );
}
