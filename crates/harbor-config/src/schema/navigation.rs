//! Navigation routing configuration.

use harbor_common::MatchPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// How local (bundled) URLs are recognised.
    pub policy: MatchPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_policy_from_toml() {
        let config: NavigationConfig = toml::from_str("policy = \"scheme\"").unwrap();
        assert_eq!(config.policy, MatchPolicy::Scheme);
    }

    #[test]
    fn navigation_policy_rejects_unknown() {
        assert!(toml::from_str::<NavigationConfig>("policy = \"prefix\"").is_err());
    }
}
