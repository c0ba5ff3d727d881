//! Manifest and configuration document loading.
//!
//! A manifest (`featgate.toml`) declares the features and the transform
//! options; a configuration document is the JSON or TOML object the
//! features get resolved into.

pub mod document;
pub mod manifest;

use std::path::PathBuf;

use thiserror::Error;

pub use document::load_document;
pub use manifest::Manifest;

/// Errors during manifest or document loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported configuration format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("configuration document {path} must contain a table at the top level")]
    NotATable { path: PathBuf },
}

fn read(path: &std::path::Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}
