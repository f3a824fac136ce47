use url::Url;

/// Everything needed to build the view, fixed before the window exists.
#[derive(Debug, Clone)]
pub struct ShellViewConfig {
    /// Bundled entry document, already resolved to a `file://` URL.
    pub entry_url: Url,
    /// Script execution. Building fails if this is off.
    pub scripts: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl ShellViewConfig {
    pub fn new(entry_url: Url) -> Self {
        Self {
            entry_url,
            scripts: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enables_scripts() {
        let url = Url::parse("file:///android_asset/index.html").unwrap();
        let config = ShellViewConfig::new(url.clone());
        assert_eq!(config.entry_url, url);
        assert!(config.scripts);
        assert!(config.user_agent.is_none());
    }
}
