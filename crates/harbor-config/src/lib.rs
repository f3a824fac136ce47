//! Harbor configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let (config, problems) = harbor_config::load_config(None).expect("failed to load config");
//! if let Some(e) = problems {
//!     eprintln!("invalid sections reset to defaults: {e}");
//! }
//! println!("{}", config.window.title);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::HarborConfig;

use std::path::Path;

use harbor_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template if no file exists. Sections
/// that fail validation are reset to their defaults and the problems are
/// returned alongside the config; the other sections are kept as parsed.
pub fn load_config(
    path: Option<&Path>,
) -> Result<(HarborConfig, Option<ConfigError>), ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    let problems = validation::reset_invalid_sections(&mut config).err();
    Ok((config, problems))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LogLevel;
    use harbor_common::MatchPolicy;

    #[test]
    fn invalid_section_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let toml = r#"
[window]
title = "Docs"

[webview]
scripts = false

[navigation]
policy = "scheme"

[logging]
level = "debug"
"#;
        std::fs::write(&path, toml).unwrap();

        let (config, problems) = load_config(Some(&path)).unwrap();
        assert!(matches!(problems, Some(ConfigError::ValidationError(_))));
        assert!(config.webview.scripts);
        assert_eq!(config.navigation.policy, MatchPolicy::Scheme);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.window.title, "Docs");
    }

    #[test]
    fn load_config_accepts_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\ntitle = \"Docs\"\n").unwrap();

        let (config, problems) = load_config(Some(&path)).unwrap();
        assert!(problems.is_none());
        assert_eq!(config.window.title, "Docs");
    }

    #[test]
    fn load_config_missing_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
