//! Output renderers for resolved features: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::Feature;

/// Trait for rendering resolved features to an output format.
pub trait OutputRenderer {
    /// Render features to a string.
    fn render(&self, features: &[Feature]) -> String;
}
