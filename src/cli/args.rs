//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Resolve declared feature flags into application configuration.
#[derive(Parser, Debug)]
#[command(name = "featgate", version = featgate::constants::VERSION)]
pub struct Cli {
    /// Emit debug logging to stderr (overrides FEATGATE_LOG).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the configuration document with resolved features as JSON.
    Resolve(ResolveArgs),

    /// List declared features with their resolved values.
    List(ListArgs),

    /// Print the environment variable that overrides each feature.
    Env(ManifestArgs),

    /// Print version and build information.
    Version,
}

/// Manifest selection shared by every command.
#[derive(Parser, Debug)]
pub struct ManifestArgs {
    /// Feature manifest (default: $FEATGATE_MANIFEST, then ./featgate.toml).
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// Configuration key holding feature values (overrides the manifest).
    #[arg(long)]
    pub config_key: Option<String>,
}

/// Arguments for the `resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// JSON or TOML configuration document to extend (default: empty object).
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Skip validation of feature keys and values.
    #[arg(long, default_value_t = false)]
    pub no_validate: bool,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
