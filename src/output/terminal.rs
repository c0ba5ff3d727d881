//! Terminal renderer: one styled line per feature, then a summary.

use colored::Colorize;
use serde_json::Value;

use crate::models::{Feature, Summary};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, features: &[Feature]) -> String {
        if features.is_empty() {
            return format!("{}", "  No features declared.\n".dimmed());
        }

        let mut output = String::new();

        for feature in features {
            let (icon, state) = match &feature.value {
                Value::Bool(true) => ("●".green().bold().to_string(), "on".green().bold().to_string()),
                Value::Bool(false) => ("○".dimmed().to_string(), "off".dimmed().to_string()),
                other => (
                    "?".yellow().bold().to_string(),
                    other.to_string().yellow().bold().to_string(),
                ),
            };

            output.push_str(&format!(" {} {} {}\n", icon, feature.key.bold(), state));
            output.push_str(&format!(
                "   {} · {}\n",
                feature.description,
                feature.env_key.cyan()
            ));
        }

        let summary = Summary::from_features(features);
        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}: {} enabled, {} disabled",
            summary.total.to_string().bold(),
            if summary.total == 1 { "feature" } else { "features" },
            summary.enabled.to_string().green().bold(),
            summary.disabled.to_string().bold(),
        ));
        if summary.other > 0 {
            output.push_str(&format!(", {} unresolved", summary.other.to_string().yellow().bold()));
        }
        output.push('\n');

        output
    }
}
