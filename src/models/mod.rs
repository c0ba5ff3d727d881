//! Shared types used across all modules.
//!
//! Declarations are what the application hands in; features are the
//! canonical records the registry builds from them. Other modules import
//! from here rather than reaching into each other's internals.

pub mod declaration;
pub mod feature;

pub use declaration::{Declaration, DeclarationRecord};
pub use feature::{env_key_for, Feature, Summary};
