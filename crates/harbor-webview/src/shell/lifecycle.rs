use std::sync::Arc;

use harbor_common::HarborError;
use tracing::info;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::ShellViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Build the view inside `window` and start loading the entry document.
    ///
    /// Order: configure the view, install the router, then load the entry.
    /// Nothing is loaded before the navigation hook is in place.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        config: ShellViewConfig,
    ) -> Result<WebViewHandle, HarborError> {
        if !config.scripts {
            return Err(HarborError::WebView(
                "script execution must be enabled for the bundled app".into(),
            ));
        }

        // 1. Configure
        let mut builder = WebViewBuilder::new()
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_initialization_script(IPC_INIT_SCRIPT);
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // 2. Install the router
        builder = Self::attach_navigation_handler(
            builder,
            self.router.clone(),
            Arc::clone(&self.events),
        );
        builder = Self::attach_new_window_handler(
            builder,
            self.router.clone(),
            Arc::clone(&self.events),
        );

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));

        // 3. Load the entry document
        let entry = config.entry_url.to_string();
        builder = builder.with_url(&entry);

        let webview = builder
            .build(window)
            .map_err(|e| HarborError::WebView(e.to_string()))?;

        info!(url = %entry, policy = ?self.router.policy(), "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: entry,
        })
    }
}
