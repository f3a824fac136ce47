//! Embedded web view for the Harbor shell.
//!
//! Wraps the `wry` crate to provide:
//! - A single view loading the bundled entry document over `file://`
//! - Navigation routing: local URLs stay in the view, everything else
//!   is handed to the platform URL opener
//! - A small JSON IPC channel (JavaScript -> Rust) with replies via script
//! - The native bridge extension point (currently always "not implemented")

pub mod bridge;
pub mod entry;
pub mod events;
pub mod host;
pub mod ipc;
pub mod router;
pub mod shell;

pub use bridge::{BridgeCall, BridgeError, NativeBridge};
pub use entry::EntryPoint;
pub use events::{PageLoadState, ShellEvent};
pub use host::{HostContext, SystemHost, ViewIntent};
pub use ipc::{IpcMessage, IpcPayload, IpcReply, IpcRouter};
pub use router::{classify, NavigationRequest, NavigationRouter, RoutingDecision};
pub use shell::{ShellViewConfig, WebViewHandle, WebViewManager};
