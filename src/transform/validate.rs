//! Strict validation of a resolved feature mapping.

use serde_json::{Map, Value};

use super::TransformError;
use crate::registry::FeatureRegistry;

/// Check every entry of `values`: the key must be declared and the value
/// must be a boolean. Keys the caller supplied but never declared are
/// checked too, even when the registry is empty.
///
/// Undeclared keys are reported before bad values, whatever their order.
pub(crate) fn validate(registry: &FeatureRegistry, values: &Map<String, Value>) -> Result<(), TransformError> {
    if let Some(key) = values.keys().find(|key| !registry.contains(key)) {
        return Err(TransformError::UnknownFeature { key: key.clone() });
    }
    if let Some((key, value)) = values.iter().find(|(_, value)| !value.is_boolean()) {
        return Err(TransformError::InvalidValue {
            key: key.clone(),
            value: display_value(value),
        });
    }
    Ok(())
}

/// Render a value for error messages: strings without quotes, the rest as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
