//! Feature manifest loading.
//!
//! Priority for transform options (highest to lowest):
//! 1. CLI flags (applied by the caller via [`Manifest::options_with`])
//! 2. Manifest values
//! 3. Built-in defaults
//!
//! ```toml
//! config_key = "features"
//! validate = true
//! features = [
//!   "widgets",
//!   { key = "existing", description = "a feature" },
//! ]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{read, ConfigError};
use crate::constants::{ENV_MANIFEST, MANIFEST_FILENAME};
use crate::env::Env;
use crate::registry::RegistryError;
use crate::transform::{FeatureTransformer, TransformOptions};

/// Feature declarations plus optional transform options.
///
/// Declarations stay untyped until the registry is built so that malformed
/// entries are reported with their position, like any other declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub config_key: Option<String>,
    pub validate: Option<bool>,
    pub features: Vec<Value>,
}

impl Manifest {
    /// Load a manifest from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        let manifest: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), declared = manifest.features.len(), "manifest loaded");
        Ok(manifest)
    }

    /// Locate the manifest: an explicit path wins, then `FEATGATE_MANIFEST`,
    /// then `featgate.toml` in `dir` if it exists.
    pub fn locate(explicit: Option<&Path>, dir: &Path, env: &Env) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env.var(ENV_MANIFEST) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        let local = dir.join(MANIFEST_FILENAME);
        local.exists().then_some(local)
    }

    /// Transform options declared by the manifest, defaults filled in.
    pub fn options(&self) -> TransformOptions {
        self.options_with(None, false)
    }

    /// Transform options with CLI overrides layered on top.
    pub fn options_with(&self, config_key: Option<&str>, no_validate: bool) -> TransformOptions {
        let mut options = TransformOptions::default();
        if let Some(key) = self.config_key.as_deref().filter(|k| !k.is_empty()) {
            options.config_key = key.to_string();
        }
        if let Some(validate) = self.validate {
            options.validate = validate;
        }
        if let Some(key) = config_key {
            options.config_key = key.to_string();
        }
        if no_validate {
            options.validate = false;
        }
        options
    }

    /// Build a transformer from this manifest's declarations.
    pub fn transformer(&self, options: TransformOptions) -> Result<FeatureTransformer, RegistryError> {
        FeatureTransformer::from_values(&self.features, options)
    }
}
