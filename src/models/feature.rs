//! Feature records and resolution summaries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ENV_KEY_PREFIX;

/// A declared feature flag together with its resolved value.
///
/// Registry copies always carry the default value (`false`); the copies
/// handed out by [`ResolvedFeatures::describe`](crate::transform::ResolvedFeatures::describe)
/// carry whatever the transformation resolved, which is only guaranteed to
/// be a boolean when validation is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Unique, non-empty identifier.
    pub key: String,
    /// Environment variable that overrides this feature.
    pub env_key: String,
    /// Human-readable description.
    pub description: String,
    /// Resolved value.
    pub value: Value,
}

impl Feature {
    /// Returns `true` only when the resolved value is boolean `true`.
    pub fn is_enabled(&self) -> bool {
        self.value == Value::Bool(true)
    }
}

/// Derive the environment variable name for `key` under `config_key`.
///
/// `("features", "new_ui")` becomes `CONFIG_FEATURES_NEW_UI`.
pub fn env_key_for(config_key: &str, key: &str) -> String {
    format!(
        "{ENV_KEY_PREFIX}_{}_{}",
        config_key.to_uppercase(),
        key.to_uppercase()
    )
}

/// Summary statistics for a set of resolved features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub enabled: usize,
    pub disabled: usize,
    /// Features holding a non-boolean value (only possible without validation).
    pub other: usize,
}

impl Summary {
    /// Compute summary from a list of features.
    pub fn from_features(features: &[Feature]) -> Self {
        let mut s = Summary::default();
        for f in features {
            s.total += 1;
            match f.value {
                Value::Bool(true) => s.enabled += 1,
                Value::Bool(false) => s.disabled += 1,
                _ => s.other += 1,
            }
        }
        s
    }
}
