//! Small value types shared between config and webview crates.

use serde::{Deserialize, Serialize};

/// How a navigation URL is recognised as bundled (local) content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Local if the URL contains `file://` anywhere.
    ///
    /// Over-broad: `https://file://evil.example` counts as local.
    #[default]
    Substring,
    /// Local only if the URL parses and its scheme is `file`.
    Scheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_substring() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::Substring);
    }

    #[test]
    fn policy_serialization() {
        let json = serde_json::to_string(&MatchPolicy::Scheme).unwrap();
        assert_eq!(json, "\"scheme\"");
        let parsed: MatchPolicy = serde_json::from_str("\"substring\"").unwrap();
        assert_eq!(parsed, MatchPolicy::Substring);
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(serde_json::from_str::<MatchPolicy>("\"regex\"").is_err());
    }
}
