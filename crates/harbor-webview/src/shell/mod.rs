//! The single embedded web view.
//!
//! `WebViewManager` owns the navigation router and the event sink and
//! builds the `wry::WebView` once the native window exists.

use std::sync::{Arc, Mutex};

use crate::events::ShellEvent;
use crate::router::NavigationRouter;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::ShellViewConfig;

pub struct WebViewManager {
    /// Event sink. Handlers push, the event loop drains.
    pub(crate) events: Arc<Mutex<Vec<ShellEvent>>>,
    router: NavigationRouter,
}

impl WebViewManager {
    pub fn new(router: NavigationRouter) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            router,
        }
    }

    pub fn router(&self) -> &NavigationRouter {
        &self.router
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<ShellEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
