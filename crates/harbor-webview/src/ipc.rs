//! IPC protocol between the page and the shell.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.harbor.ipc.send(kind, payload)` posts
//!   `{"kind": ..., "payload": ...}` through wry's `window.ipc.postMessage`.
//! - **Rust -> JS**: the shell evaluates `window.harbor.ipc._dispatch(kind, payload)`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::bridge::{BridgeCall, BridgeError, NativeBridge};
use crate::host::{HostContext, ViewIntent};

/// Message kinds the page may send. Anything else is dropped.
pub const ALLOWED_IPC_KINDS: &[&str] = &["open_external", "native_invoke", "ping"];

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum IpcPayload {
    /// `null` or a missing key.
    #[default]
    None,
    Text(String),
    Json(serde_json::Value),
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// A message to deliver back into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct IpcReply {
    pub kind: String,
    pub payload: serde_json::Value,
}

impl IpcReply {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    pub fn to_script(&self) -> String {
        js_dispatch_message(&self.kind, &self.payload)
    }
}

/// Validates page messages and acts on them.
pub struct IpcRouter {
    host: Arc<dyn HostContext>,
    bridge: NativeBridge,
}

impl IpcRouter {
    pub fn new(host: Arc<dyn HostContext>, bridge: NativeBridge) -> Self {
        Self { host, bridge }
    }

    /// Handle one raw message body. Returns the reply to send, if any.
    pub fn handle(&self, body: &str) -> Option<IpcReply> {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return None;
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return None;
        }

        debug!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "ping" => Some(IpcReply::new("pong", json!("pong"))),
            "open_external" => {
                self.open_external(&msg.payload);
                None
            }
            "native_invoke" => Some(self.native_invoke(&msg.payload)),
            _ => None,
        }
    }

    /// Explicit request from the page: dispatched without classification.
    fn open_external(&self, payload: &IpcPayload) {
        match payload {
            IpcPayload::Text(url) if !url.is_empty() => {
                self.host.dispatch(ViewIntent::new(url.as_str()));
            }
            _ => warn!(?payload, "open_external ignored: expected a URL string"),
        }
    }

    fn native_invoke(&self, payload: &IpcPayload) -> IpcReply {
        let call = match BridgeCall::from_payload(payload) {
            Ok(call) => call,
            Err(e) => {
                warn!(error = %e, "native bridge call rejected");
                // Keep the id so the page can still reject the pending promise.
                let id = match payload {
                    IpcPayload::Json(value) => value.get("id").and_then(serde_json::Value::as_u64),
                    _ => None,
                };
                return native_error(id, None, &e);
            }
        };

        match self.bridge.invoke(&call) {
            Ok(value) => IpcReply::new("native_result", json!({ "id": call.id, "value": value })),
            Err(e) => {
                warn!(capability = %call.capability, error = %e, "native bridge call failed");
                native_error(call.id, Some(call.capability.as_str()), &e)
            }
        }
    }
}

fn native_error(id: Option<u64>, capability: Option<&str>, err: &BridgeError) -> IpcReply {
    IpcReply::new(
        "native_error",
        json!({
            "id": id,
            "capability": capability,
            "message": err.to_string(),
        }),
    )
}

/// JavaScript snippet that sets up the `window.harbor` API on the page.
/// Injected as an initialization script before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.harbor = window.harbor || {};
    var ipc = window.harbor.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };

    window.harbor.openExternal = function(url) {
        ipc.send('open_external', String(url));
    };

    var pending = {};
    var nextId = 1;
    window.harbor.native = {
        invoke: function(capability, args) {
            var id = nextId++;
            return new Promise(function(resolve, reject) {
                pending[id] = { resolve: resolve, reject: reject };
                ipc.send('native_invoke', {
                    id: id,
                    capability: capability,
                    args: args === undefined ? null : args
                });
            });
        }
    };
    ipc.on('native_result', function(p) {
        var call = p && pending[p.id];
        if (call) {
            delete pending[p.id];
            call.resolve(p.value);
        }
    });
    ipc.on('native_error', function(p) {
        var call = p && pending[p.id];
        if (call) {
            delete pending[p.id];
            call.reject(new Error(p.message));
        }
    });
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.harbor.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
