//! Embedded web view settings.

use serde::{Deserialize, Serialize};

/// Bundled content location and one-time view toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Directory holding the bundled assets, relative to the working directory.
    pub assets_dir: String,
    /// Entry document, relative to `assets_dir`.
    pub entry: String,
    /// Script execution inside the view. The shell refuses to start without it.
    pub scripts: bool,
    /// Web inspector (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            assets_dir: "assets".into(),
            entry: "index.html".into(),
            scripts: true,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Harbor/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}
