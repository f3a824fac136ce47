//! Native capabilities exposed to page script.
//!
//! Reserved extension point. No capability exists yet, so every call
//! fails with [`BridgeError::NotImplemented`] and the page receives a
//! rejected promise.

use serde::Deserialize;

use crate::ipc::IpcPayload;

/// A call made through `window.harbor.native.invoke(capability, args)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BridgeCall {
    /// Correlates the reply with the pending promise on the page.
    #[serde(default)]
    pub id: Option<u64>,
    pub capability: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

impl BridgeCall {
    pub fn from_payload(payload: &IpcPayload) -> Result<Self, BridgeError> {
        match payload {
            IpcPayload::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| BridgeError::InvalidCall(e.to_string())),
            IpcPayload::Text(_) | IpcPayload::None => Err(BridgeError::InvalidCall(
                "expected an object with a `capability` field".into(),
            )),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("native capability not implemented: {capability}")]
    NotImplemented { capability: String },

    #[error("invalid native call: {0}")]
    InvalidCall(String),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBridge;

impl NativeBridge {
    pub fn invoke(&self, call: &BridgeCall) -> Result<serde_json::Value, BridgeError> {
        Err(BridgeError::NotImplemented {
            capability: call.capability.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_call_from_json_payload() {
        let payload = IpcPayload::Json(json!({
            "id": 3,
            "capability": "fs.read",
            "args": { "path": "notes.txt" }
        }));
        let call = BridgeCall::from_payload(&payload).unwrap();
        assert_eq!(call.id, Some(3));
        assert_eq!(call.capability, "fs.read");
        assert_eq!(call.args["path"], "notes.txt");
    }

    #[test]
    fn id_and_args_are_optional() {
        let payload = IpcPayload::Json(json!({ "capability": "fs.stat" }));
        let call = BridgeCall::from_payload(&payload).unwrap();
        assert_eq!(call.id, None);
        assert!(call.args.is_null());
    }

    #[test]
    fn rejects_text_payload() {
        let err = BridgeCall::from_payload(&IpcPayload::Text("fs.read".into())).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidCall(_)));
    }

    #[test]
    fn rejects_object_without_capability() {
        let err = BridgeCall::from_payload(&IpcPayload::Json(json!({ "args": [] }))).unwrap_err();
        assert!(err.to_string().contains("capability"));
    }

    #[test]
    fn every_capability_is_not_implemented() {
        let bridge = NativeBridge;
        for capability in ["fs.read", "fs.write", "anything"] {
            let call = BridgeCall {
                id: None,
                capability: capability.into(),
                args: serde_json::Value::Null,
            };
            assert_eq!(
                bridge.invoke(&call),
                Err(BridgeError::NotImplemented {
                    capability: capability.into()
                })
            );
        }
    }
}
