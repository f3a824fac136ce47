//! Entry document and view toggle validation.

use std::path::{Component, Path};

use crate::schema::HarborConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &HarborConfig) {
    let webview = &config.webview;

    validate_non_empty(errors, "webview.assets_dir", &webview.assets_dir);
    validate_non_empty(errors, "webview.entry", &webview.entry);

    let entry = Path::new(&webview.entry);
    if entry.is_absolute() {
        errors.push(format!(
            "webview.entry = {:?} must be relative to webview.assets_dir",
            webview.entry
        ));
    }
    if entry.components().any(|c| matches!(c, Component::ParentDir)) {
        errors.push(format!(
            "webview.entry = {:?} must not leave webview.assets_dir",
            webview.entry
        ));
    }

    if !webview.scripts {
        errors.push("webview.scripts must be true: the shell requires script execution".into());
    }
}
