//! App-wide constants.
//!
//! Centralises the tool name, defaults, manifest paths, and environment
//! variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "featgate";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "featgate.toml";

/// Configuration key that holds feature values unless overridden.
pub const DEFAULT_CONFIG_KEY: &str = "features";

/// Description given to features declared without one.
pub const DEFAULT_DESCRIPTION: &str = "no description";

/// Leading segment of every derived feature environment variable.
pub const ENV_KEY_PREFIX: &str = "CONFIG";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_MANIFEST: &str = "FEATGATE_MANIFEST";
pub const ENV_LOG: &str = "FEATGATE_LOG";
