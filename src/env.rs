//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Callers that want a deterministic snapshot (tests, embedding hosts) use
//! [`Env::from_vars()`] backed by a `HashMap`, so nothing ever needs
//! `unsafe` calls to [`std::env::set_var`] / [`std::env::remove_var`].

use std::collections::HashMap;
use std::env::VarError;
use std::ffi::OsString;

/// Environment variable reader.
///
/// Wraps lookups so that production code hits `std::env` while tests
/// can supply a controlled set of values. Snapshot values are kept as
/// `OsString` so they behave like the real environment, including values
/// that are not valid UTF-8.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, OsString>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn from_vars(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<OsString>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Create an `Env` with no variables at all.
    pub fn empty() -> Self {
        Self {
            overrides: Some(HashMap::new()),
        }
    }

    /// Look up an environment variable by name.
    ///
    /// Mirrors [`std::env::var`]: a set but non-UTF-8 value yields
    /// [`VarError::NotUnicode`].
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.overrides {
            Some(map) => match map.get(name) {
                Some(value) => value.clone().into_string().map_err(VarError::NotUnicode),
                None => Err(VarError::NotPresent),
            },
            None => std::env::var(name),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn from_vars_returns_set_values() {
        let env = Env::from_vars([("CONFIG_FEATURES_NEW_UI", "true"), ("BAZ", "qux")]);
        assert_eq!(env.var("CONFIG_FEATURES_NEW_UI").unwrap(), "true");
        assert_eq!(env.var("BAZ").unwrap(), "qux");
    }

    #[test]
    fn from_vars_does_not_fall_through_to_process_env() {
        let env = Env::empty();
        assert!(env.var("CARGO_MANIFEST_DIR").is_err());
    }

    #[test]
    fn empty_value_is_present() {
        let env = Env::from_vars([("PRESENT", "")]);
        assert_eq!(env.var("PRESENT").unwrap(), "");
        assert_eq!(env.var("ABSENT"), Err(VarError::NotPresent));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_not_unicode() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"tr\xffue".to_vec());
        let env = Env::from_vars([("BIN", raw.clone())]);
        assert_eq!(env.var("BIN"), Err(VarError::NotUnicode(raw)));
    }
}
