//! Events raised by the web view and drained by the shell's event loop.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    PageLoad { state: PageLoadState, url: String },
    TitleChanged { title: String },
    /// Raw JSON body posted by the page through `window.ipc.postMessage`.
    IpcMessage { body: String },
    /// A navigation was handed to the host instead of loading in the view.
    ExternalDispatched { url: String },
}
