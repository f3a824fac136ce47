//! HarborApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use harbor_common::HarborError;
use harbor_config::HarborConfig;
use harbor_webview::{HostContext, IpcRouter, NativeBridge, WebViewHandle, WebViewManager};

/// How often web view events are drained.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Top-level application state.
pub struct HarborApp {
    pub(super) config: HarborConfig,
    /// Shared with the navigation router and the IPC router.
    pub(super) host: Arc<dyn HostContext>,
    pub(super) ipc: IpcRouter,

    // Declared before `window`: the view must drop first.
    pub(super) webview: Option<WebViewHandle>,
    pub(super) manager: Option<WebViewManager>,
    pub(super) window: Option<Window>,

    pub(super) startup_error: Option<HarborError>,
    pub(super) last_poll: Instant,
}

impl HarborApp {
    pub fn new(config: HarborConfig, host: Arc<dyn HostContext>) -> Self {
        Self {
            config,
            ipc: IpcRouter::new(Arc::clone(&host), NativeBridge),
            host,
            webview: None,
            manager: None,
            window: None,
            startup_error: None,
            last_poll: Instant::now(),
        }
    }

    /// The error that stopped initialization, if any.
    pub fn startup_error(&self) -> Option<&HarborError> {
        self.startup_error.as_ref()
    }
}
