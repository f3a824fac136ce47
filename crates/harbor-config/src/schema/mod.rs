//! Configuration schema types for Harbor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod navigation;
mod webview;
mod window;

pub use logging::*;
pub use navigation::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the Harbor shell.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarborConfig {
    pub window: WindowConfig,
    pub webview: WebViewSettings,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_common::MatchPolicy;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: HarborConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Harbor");
        assert_eq!(config.webview.entry, "index.html");
        assert_eq!(config.navigation.policy, MatchPolicy::Substring);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_are_independent() {
        let config: HarborConfig = toml::from_str(
            r#"
[navigation]
policy = "scheme"
"#,
        )
        .unwrap();
        assert_eq!(config.navigation.policy, MatchPolicy::Scheme);
        assert_eq!(config.window.width, 1024);
        assert!(config.webview.scripts);
    }
}
