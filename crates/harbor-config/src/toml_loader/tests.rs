//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use harbor_common::{ConfigError, MatchPolicy};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_harbor_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[webview]
assets_dir = "www"
entry = "start.html"

[navigation]
policy = "scheme"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.webview.assets_dir, "www");
    assert_eq!(config.webview.entry, "start.html");
    assert_eq!(config.navigation.policy, MatchPolicy::Scheme);
    // Defaults preserved
    assert_eq!(config.window.title, "Harbor");
    assert!(config.webview.scripts);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\nwidth = 10\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.width, 10);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harbor").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Harbor");
    assert_eq!(config.webview.entry, "index.html");
    assert_eq!(config.navigation.policy, MatchPolicy::Substring);
}

#[test]
fn default_template_parses_and_validates() {
    let config: crate::HarborConfig = toml::from_str(super::template::default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_harbor() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("harbor/config.toml"));
    }
}
