//! JSON output renderer.
//!
//! Outputs `{"features": [...], "summary": {...}}` format.

use crate::models::{Feature, Summary};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, features: &[Feature]) -> String {
        let summary = Summary::from_features(features);

        let output = serde_json::json!({
            "features": features,
            "summary": summary,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
