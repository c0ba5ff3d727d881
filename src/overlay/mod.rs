//! Environment overlay.
//!
//! Given a map of environment variable name → config key, overlays the
//! values found in an [`Env`] onto a key/value mapping. Textual booleans are
//! optionally coerced; any other text is passed through as a string so a
//! later validation step can reject it.

use std::collections::BTreeMap;
use std::env::VarError;

use serde_json::{Map, Value};

use crate::env::Env;

/// Overlays environment values onto a feature value mapping.
#[derive(Debug, Clone)]
pub struct EnvironmentOverlay {
    env_map: BTreeMap<String, String>,
    resolve_booleans: bool,
}

impl EnvironmentOverlay {
    pub fn new(env_map: BTreeMap<String, String>, resolve_booleans: bool) -> Self {
        Self {
            env_map,
            resolve_booleans,
        }
    }

    /// Return a new mapping with every set environment variable applied.
    ///
    /// Unset variables leave the prior value untouched; keys with no
    /// environment mapping pass through unchanged. A set value that is not
    /// valid UTF-8 is decoded lossily and still applied. The input is not
    /// modified.
    pub fn apply(&self, values: &Map<String, Value>, env: &Env) -> Map<String, Value> {
        let mut overlaid = values.clone();
        for (env_key, key) in &self.env_map {
            let raw = match env.var(env_key) {
                Ok(raw) => raw,
                Err(VarError::NotPresent) => continue,
                Err(VarError::NotUnicode(os)) => {
                    tracing::warn!(%env_key, %key, "environment value is not valid UTF-8");
                    os.to_string_lossy().into_owned()
                }
            };
            let value = coerce(raw, self.resolve_booleans);
            tracing::debug!(%env_key, %key, %value, "environment override applied");
            overlaid.insert(key.clone(), value);
        }
        overlaid
    }
}

/// Convert raw environment text into a config value.
///
/// With `resolve_booleans`, exactly `"true"` and `"false"` become booleans.
/// Everything else stays a string.
pub fn coerce(raw: String, resolve_booleans: bool) -> Value {
    if resolve_booleans {
        match raw.as_str() {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
    }
    Value::String(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overlay() -> EnvironmentOverlay {
        EnvironmentOverlay::new(
            BTreeMap::from([
                ("CONFIG_FEATURES_WIDGETS".to_string(), "widgets".to_string()),
                ("CONFIG_FEATURES_EXISTING".to_string(), "existing".to_string()),
            ]),
            true,
        )
    }

    fn values(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn coerces_textual_booleans() {
        assert_eq!(coerce("true".into(), true), json!(true));
        assert_eq!(coerce("false".into(), true), json!(false));
        assert_eq!(coerce("TRUE".into(), true), json!("TRUE"));
        assert_eq!(coerce("1".into(), true), json!("1"));
        assert_eq!(coerce("true".into(), false), json!("true"));
    }

    #[test]
    fn set_variables_override_prior_values() {
        let env = Env::from_vars([("CONFIG_FEATURES_EXISTING", "false")]);
        let out = overlay().apply(&values(json!({ "existing": true, "widgets": false })), &env);
        assert_eq!(out["existing"], json!(false));
        assert_eq!(out["widgets"], json!(false));
    }

    #[test]
    fn unset_variables_leave_values_untouched() {
        let input = values(json!({ "existing": true, "widgets": "odd" }));
        let out = overlay().apply(&input, &Env::empty());
        assert_eq!(out, input);
    }

    #[test]
    fn unmapped_keys_pass_through() {
        let env = Env::from_vars([("CONFIG_FEATURES_WIDGETS", "true"), ("CONFIG_FEATURES_OTHER", "true")]);
        let out = overlay().apply(&values(json!({ "other": 5 })), &env);
        assert_eq!(out["other"], json!(5));
        assert_eq!(out["widgets"], json!(true));
    }

    #[test]
    fn unrecognized_text_passes_through_as_string() {
        let env = Env::from_vars([("CONFIG_FEATURES_WIDGETS", "yes")]);
        let out = overlay().apply(&values(json!({ "widgets": false })), &env);
        assert_eq!(out["widgets"], json!("yes"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_applied_lossily() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let env = Env::from_vars([(
            "CONFIG_FEATURES_WIDGETS",
            OsString::from_vec(b"tr\xffue".to_vec()),
        )]);
        let out = overlay().apply(&values(json!({ "widgets": false })), &env);
        assert_eq!(out["widgets"], json!("tr\u{fffd}ue"));
    }

    #[test]
    fn input_is_not_modified() {
        let input = values(json!({ "widgets": false }));
        let env = Env::from_vars([("CONFIG_FEATURES_WIDGETS", "true")]);
        let _ = overlay().apply(&input, &env);
        assert_eq!(input["widgets"], json!(false));
    }
}
