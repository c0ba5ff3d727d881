//! Results of a transformation.
//!
//! A resolved feature set has two views over the same state: a flat
//! key → value mapping for application logic, and an ordered list of full
//! feature records for introspection.

use serde_json::{Map, Value};

use crate::models::Feature;
use crate::registry::FeatureRegistry;

/// Resolved feature values plus their metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFeatures {
    values: Map<String, Value>,
    features: Vec<Feature>,
}

impl ResolvedFeatures {
    pub(crate) fn new(registry: &FeatureRegistry, values: Map<String, Value>) -> Self {
        let features = registry
            .features()
            .map(|declared| {
                let mut feature = declared.clone();
                if let Some(value) = values.get(&declared.key) {
                    feature.value = value.clone();
                }
                feature
            })
            .collect();
        Self { values, features }
    }

    /// Raw resolved value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// `true` only if `key` resolved to boolean `true`.
    pub fn is_enabled(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(Value::Bool(true)))
    }

    /// The flat key → value mapping, as written into the configuration.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Every declared feature, sorted by key, carrying its resolved value.
    pub fn describe(&self) -> &[Feature] {
        &self.features
    }
}

/// A transformed configuration object and the features resolved into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    config: Map<String, Value>,
    features: ResolvedFeatures,
}

impl ResolvedConfig {
    pub(crate) fn new(config: Map<String, Value>, features: ResolvedFeatures) -> Self {
        Self { config, features }
    }

    /// The new configuration object.
    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    pub fn features(&self) -> &ResolvedFeatures {
        &self.features
    }

    pub fn into_config(self) -> Map<String, Value> {
        self.config
    }
}
