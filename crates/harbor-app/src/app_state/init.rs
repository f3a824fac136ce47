//! Startup sequence: resolve the entry, open the window, build the view.

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use harbor_common::HarborError;
use harbor_webview::{EntryPoint, NavigationRouter, ShellViewConfig, WebViewManager};

use super::core::HarborApp;

impl HarborApp {
    /// Run the fixed setup sequence. Nothing is shown if any step fails.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HarborError> {
        let settings = &self.config.webview;

        let entry = EntryPoint::new(&settings.assets_dir, &settings.entry);
        let entry_url = entry.resolve()?;
        tracing::info!(url = %entry_url, "Entry document resolved");

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));
        let window = event_loop
            .create_window(attrs)
            .map_err(|e| HarborError::Window(e.to_string()))?;

        let router = NavigationRouter::new(self.host.clone(), self.config.navigation.policy);
        let manager = WebViewManager::new(router);

        let view_config = ShellViewConfig {
            entry_url,
            scripts: settings.scripts,
            devtools: settings.devtools || cfg!(debug_assertions),
            user_agent: settings.user_agent.clone(),
        };
        let handle = manager.create(&window, view_config)?;

        self.webview = Some(handle);
        self.manager = Some(manager);
        self.window = Some(window);
        tracing::info!("Window and WebView initialized");
        Ok(())
    }
}
