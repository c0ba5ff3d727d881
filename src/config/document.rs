//! Configuration document loading (JSON or TOML).

use std::path::Path;

use serde_json::{Map, Value};

use super::{read, ConfigError};

/// Load a configuration document into an object map.
///
/// The format is picked from the file extension.
pub fn load_document(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let value: Value = match ext.as_str() {
        "json" => {
            let content = read(path)?;
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        "toml" => {
            let content = read(path)?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotATable {
            path: path.to_path_buf(),
        }),
    }
}
