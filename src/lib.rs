//! featgate — declared boolean feature flags resolved into configuration.
//!
//! Declare features once, then extend any configuration object with their
//! resolved values. Precedence, highest first: environment variable,
//! value already in the configuration, default `false`.
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod overlay;
pub mod registry;
pub mod transform;

pub use env::Env;
pub use models::{Declaration, DeclarationRecord, Feature};
pub use registry::{FeatureRegistry, RegistryError};
pub use transform::{features, FeatureTransformer, ResolvedConfig, ResolvedFeatures, TransformError, TransformOptions};
