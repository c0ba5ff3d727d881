//! Feature registry: the canonical, immutable set of declared features.
//!
//! Built once from the declaration list. Holds every feature keyed (and
//! therefore ordered) by key, plus the environment-variable → key map the
//! overlay consults. Nothing mutates a registry after construction.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::constants::DEFAULT_DESCRIPTION;
use crate::models::{env_key_for, Declaration, Feature};

/// Errors raised while building a registry from declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("feature key is required (features[{index}])")]
    MissingKey { index: usize },

    #[error("features[{index}] is previously defined (\"{key}\")")]
    DuplicateKey { index: usize, key: String },
}

/// Immutable registry of declared features.
#[derive(Debug, Clone)]
pub struct FeatureRegistry {
    config_key: String,
    features: BTreeMap<String, Feature>,
    env_map: BTreeMap<String, String>,
}

impl FeatureRegistry {
    /// Build a registry from typed declarations.
    pub fn new<I, D>(config_key: &str, declarations: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = D>,
        D: Into<Declaration>,
    {
        Self::build(config_key, declarations.into_iter().map(|d| Some(d.into())))
    }

    /// Build a registry from untyped declarations, e.g. a manifest array.
    ///
    /// Entries that are neither strings nor objects fail with
    /// [`RegistryError::MissingKey`].
    pub fn from_values(config_key: &str, declarations: &[Value]) -> Result<Self, RegistryError> {
        Self::build(config_key, declarations.iter().map(Declaration::from_value))
    }

    fn build(
        config_key: &str,
        declarations: impl Iterator<Item = Option<Declaration>>,
    ) -> Result<Self, RegistryError> {
        let mut features = BTreeMap::new();

        for (index, declaration) in declarations.enumerate() {
            let declaration = declaration.ok_or(RegistryError::MissingKey { index })?;
            let feature = Self::canonicalize(config_key, &declaration)
                .ok_or(RegistryError::MissingKey { index })?;

            if features.contains_key(&feature.key) {
                return Err(RegistryError::DuplicateKey {
                    index,
                    key: feature.key,
                });
            }
            features.insert(feature.key.clone(), feature);
        }

        let mut env_map = BTreeMap::new();
        for feature in features.values() {
            if let Some(previous) = env_map.insert(feature.env_key.clone(), feature.key.clone()) {
                tracing::warn!(
                    env_key = %feature.env_key,
                    shadowed = %previous,
                    key = %feature.key,
                    "environment variable claimed by more than one feature"
                );
            }
        }

        tracing::debug!(config_key, count = features.len(), "feature registry built");

        Ok(Self {
            config_key: config_key.to_string(),
            features,
            env_map,
        })
    }

    fn canonicalize(config_key: &str, declaration: &Declaration) -> Option<Feature> {
        let key = declaration.key()?;
        Some(Feature {
            key: key.to_string(),
            env_key: declaration
                .env_key()
                .map(str::to_string)
                .unwrap_or_else(|| env_key_for(config_key, key)),
            description: declaration
                .description()
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
            value: Value::Bool(false),
        })
    }

    /// The configuration key this registry derives environment names from.
    pub fn config_key(&self) -> &str {
        &self.config_key
    }

    /// Declared keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Declared features in key order, carrying their default values.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    pub fn get(&self, key: &str) -> Option<&Feature> {
        self.features.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    /// Environment variable name → feature key.
    pub fn env_map(&self) -> &BTreeMap<String, String> {
        &self.env_map
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
