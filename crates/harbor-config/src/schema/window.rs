//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Native window hosting the web view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window title. Replaced by the document title once it loads.
    pub title: String,
    /// Logical width (valid range: 200-8192).
    pub width: u32,
    /// Logical height (valid range: 200-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Harbor".into(),
            width: 1024,
            height: 768,
        }
    }
}
