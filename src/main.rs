//! featgate — resolve declared feature flags into configuration.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages. This is the only
//! place that reads the live process environment.

mod cli;

use featgate::config::{self, Manifest};
use featgate::constants;
use featgate::env::Env;
use featgate::output::json::JsonRenderer;
use featgate::output::terminal::TerminalRenderer;
use featgate::output::OutputRenderer;
use featgate::FeatureTransformer;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Map;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, ListArgs, ManifestArgs, OutputFormat, ResolveArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    init_logging(cli.verbose, &env);

    match cli.command {
        Command::Resolve(args) => run_resolve(args, &env),
        Command::List(args) => run_list(args, &env),
        Command::Env(args) => run_env(args, &env),
        Command::Version => run_version(),
    }
}

/// Install the stderr subscriber. `--verbose` wins over `FEATGATE_LOG`.
fn init_logging(verbose: bool, env: &Env) {
    let filter = if verbose {
        EnvFilter::new("featgate=debug")
    } else {
        env.var(constants::ENV_LOG)
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Print the transformed configuration document.
fn run_resolve(args: ResolveArgs, env: &Env) -> Result<()> {
    let resolved = resolve(&args, env)?;
    let output = serde_json::to_string_pretty(resolved.config())
        .context("failed to serialize resolved configuration")?;
    println!("{output}");
    Ok(())
}

/// Print every declared feature with its resolved value.
fn run_list(args: ListArgs, env: &Env) -> Result<()> {
    let resolved = resolve(&args.resolve, env)?;
    let renderer: Box<dyn OutputRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    print!("{}", renderer.render(resolved.features().describe()));
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Print the override variable for each declared feature.
fn run_env(args: ManifestArgs, env: &Env) -> Result<()> {
    let transformer = load_transformer(&args, false, env)?;
    for feature in transformer.registry().features() {
        println!("{}\t{}", feature.env_key, feature.key);
    }
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

fn resolve(args: &ResolveArgs, env: &Env) -> Result<featgate::ResolvedConfig> {
    let transformer = load_transformer(&args.manifest, args.no_validate, env)?;

    let document = match &args.config {
        Some(path) => config::load_document(path)?,
        None => Map::new(),
    };

    transformer
        .transform_from_process_env(&document)
        .context("failed to resolve features")
}

fn load_transformer(args: &ManifestArgs, no_validate: bool, env: &Env) -> Result<FeatureTransformer> {
    let manifest = match Manifest::locate(args.manifest.as_deref(), Path::new("."), env) {
        Some(path) => Manifest::load(&path)?,
        None => {
            tracing::warn!(
                "no manifest found (looked for --manifest, ${}, ./{}); no features declared",
                constants::ENV_MANIFEST,
                constants::MANIFEST_FILENAME
            );
            Manifest::default()
        }
    };

    let options = manifest.options_with(args.config_key.as_deref(), no_validate);
    manifest
        .transformer(options)
        .context("invalid feature declarations")
}
