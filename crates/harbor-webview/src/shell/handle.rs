use wry::WebView;

use crate::ipc::IpcReply;

/// Handle to the live view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// Last URL the view committed to (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Deliver a reply into the page's `window.harbor.ipc` handlers.
    pub fn send_reply(&self, reply: &IpcReply) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&reply.to_script())
    }

    /// Set the view bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
