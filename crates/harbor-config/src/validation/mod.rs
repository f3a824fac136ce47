//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod webview;
mod window;


use crate::schema::HarborConfig;
use harbor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HarborConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    webview::validate_webview(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Reset every section that fails validation to its defaults.
///
/// Sections that pass, and sections with nothing to validate, keep their
/// parsed values. Returns the collected errors for the reset sections.
pub fn reset_invalid_sections(config: &mut HarborConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let mut window_errors = Vec::new();
    window::validate_window(&mut window_errors, config);
    if !window_errors.is_empty() {
        config.window = Default::default();
        errors.append(&mut window_errors);
    }

    let mut webview_errors = Vec::new();
    webview::validate_webview(&mut webview_errors, config);
    if !webview_errors.is_empty() {
        config.webview = Default::default();
        errors.append(&mut webview_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
