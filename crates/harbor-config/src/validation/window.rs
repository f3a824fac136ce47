//! Window size and title validation.

use crate::schema::HarborConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &HarborConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 8192);
    validate_range(errors, "window.height", config.window.height, 200, 8192);
    validate_non_empty(errors, "window.title", &config.window.title);
}
