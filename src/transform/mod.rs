//! The configuration transformer.
//!
//! Resolution order for every declared feature (highest wins):
//! 1. Environment variable (`CONFIG_<CONFIG_KEY>_<KEY>`)
//! 2. Value already present in the configuration object
//! 3. Registry default (`false`)
//!
//! Each call builds new maps; neither the input configuration nor the
//! registry is ever modified.

mod resolved;
mod validate;

pub use resolved::{ResolvedConfig, ResolvedFeatures};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::DEFAULT_CONFIG_KEY;
use crate::env::Env;
use crate::models::Declaration;
use crate::overlay::EnvironmentOverlay;
use crate::registry::{FeatureRegistry, RegistryError};

/// Errors raised while transforming a configuration object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid feature defined \"{key}\"")]
    UnknownFeature { key: String },

    #[error("Invalid value (\"{value}\") for \"{key}\"")]
    InvalidValue { key: String, value: String },

    #[error("configuration entry \"{config_key}\" must be a table of feature values")]
    InvalidFeatureTable { config_key: String },
}

/// Options controlling where features live and how strictly they are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Configuration key holding feature values.
    pub config_key: String,
    /// Reject undeclared keys and non-boolean values.
    pub validate: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            config_key: DEFAULT_CONFIG_KEY.to_string(),
            validate: true,
        }
    }
}

/// Build a transformer for the given declarations.
///
/// ```
/// use featgate::{features, Env, TransformOptions};
/// use serde_json::json;
///
/// let transformer = features(["new_ui", "new_campaign"], TransformOptions::default()).unwrap();
/// let config = json!({ "features": { "new_ui": true } });
/// let resolved = transformer
///     .transform(config.as_object().unwrap(), &Env::empty())
///     .unwrap();
///
/// assert!(resolved.features().is_enabled("new_ui"));
/// assert_eq!(resolved.config()["features"]["new_campaign"], json!(false));
/// ```
pub fn features<I, D>(declarations: I, options: TransformOptions) -> Result<FeatureTransformer, RegistryError>
where
    I: IntoIterator<Item = D>,
    D: Into<Declaration>,
{
    let registry = FeatureRegistry::new(&options.config_key, declarations)?;
    Ok(FeatureTransformer::with_registry(registry, options.validate))
}

/// Extends configuration objects with resolved feature values.
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct FeatureTransformer {
    registry: FeatureRegistry,
    overlay: EnvironmentOverlay,
    validate: bool,
}

impl FeatureTransformer {
    /// Build a transformer from untyped declarations (manifest entries).
    pub fn from_values(declarations: &[Value], options: TransformOptions) -> Result<Self, RegistryError> {
        let registry = FeatureRegistry::from_values(&options.config_key, declarations)?;
        Ok(Self::with_registry(registry, options.validate))
    }

    fn with_registry(registry: FeatureRegistry, validate: bool) -> Self {
        let overlay = EnvironmentOverlay::new(registry.env_map().clone(), true);
        Self {
            registry,
            overlay,
            validate,
        }
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn config_key(&self) -> &str {
        self.registry.config_key()
    }

    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Transform `config`, reading overrides from `env`.
    ///
    /// Returns a shallow copy of `config` whose feature entry holds the
    /// resolved values. Every other entry is copied through unchanged.
    pub fn transform(&self, config: &Map<String, Value>, env: &Env) -> Result<ResolvedConfig, TransformError> {
        let config_key = self.config_key();

        let supplied = match config.get(config_key) {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(values)) => values.clone(),
            Some(_) => {
                return Err(TransformError::InvalidFeatureTable {
                    config_key: config_key.to_string(),
                });
            }
        };

        let merged = self.fill_defaults(supplied);
        let overlaid = self.overlay.apply(&merged, env);

        if self.validate {
            validate::validate(&self.registry, &overlaid)?;
        } else {
            tracing::trace!(config_key, "feature validation disabled");
        }

        let features = ResolvedFeatures::new(&self.registry, overlaid);
        let mut new_config = config.clone();
        new_config.insert(
            config_key.to_string(),
            Value::Object(features.values().clone()),
        );

        tracing::debug!(
            config_key,
            declared = self.registry.len(),
            enabled = features.describe().iter().filter(|f| f.is_enabled()).count(),
            "features resolved"
        );

        Ok(ResolvedConfig::new(new_config, features))
    }

    /// Transform `config` using the live process environment.
    pub fn transform_from_process_env(&self, config: &Map<String, Value>) -> Result<ResolvedConfig, TransformError> {
        self.transform(config, &Env::real())
    }

    /// Insert the registry default for every declared key the caller left out.
    fn fill_defaults(&self, mut values: Map<String, Value>) -> Map<String, Value> {
        for feature in self.registry.features() {
            if !values.contains_key(&feature.key) {
                values.insert(feature.key.clone(), feature.value.clone());
            }
        }
        values
    }
}
