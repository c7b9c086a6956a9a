//! Depgraph Scan CLI
//!
//! Extracts the `require` / `require.resolve` / `require.async` dependencies of
//! JavaScript files and prints them as one JSON document.
//!
//! # Usage
//!
//! ```bash
//! # Scan a directory with the standard options
//! cargo run --bin depgraph-scan -- src/
//!
//! # Strict checking, pretty output
//! cargo run --bin depgraph-scan -- --preset strict --pretty index.js lib/
//!
//! # Options from a config file
//! cargo run --bin depgraph-scan -- --config depgraph.yaml src/
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use depgraph_parser::{load_sources, parse_batch, ParseError, ParseOptions, ParseResult, Preset};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "depgraph-scan")]
#[command(about = "Extract require dependencies from JavaScript sources", long_about = None)]
struct Cli {
    /// Files or directories to scan
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Option preset (strict, standard, lenient, minimal)
    #[arg(short, long)]
    preset: Option<String>,

    /// Ignore @require tags in comments
    #[arg(long)]
    no_comments: bool,

    /// Ignore require.resolve calls
    #[arg(long)]
    no_resolve: bool,

    /// Ignore require.async calls
    #[arg(long)]
    no_async: bool,

    /// Fail on calls with a wrong number of arguments
    #[arg(long)]
    check_length: bool,

    /// Skip calls with non-literal arguments instead of failing
    #[arg(long)]
    allow_non_literal: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    results: Vec<ParseResult>,
    errors: Vec<ParseError>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = resolve_options(&cli)?;
    tracing::debug!(?options, "resolved options");

    let sources = load_sources(&cli.paths).context("failed to load sources")?;

    let mut report = Report {
        results: Vec::with_capacity(sources.len()),
        errors: Vec::new(),
    };
    for outcome in parse_batch(&sources, &options) {
        match outcome {
            Ok(result) => report.results.push(result),
            Err(error) => {
                tracing::warn!(path = error.path(), code = %error.code, "parse failed");
                report.errors.push(error);
            }
        }
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(if report.errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file or preset first, then the individual flags on top
fn resolve_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = match (&cli.config, &cli.preset) {
        (Some(path), _) => ParseOptions::from_yaml(&path.to_string_lossy())
            .with_context(|| format!("failed to load config {}", path.display()))?,
        (None, Some(name)) => ParseOptions::preset(Preset::from_str(name).map_err(anyhow::Error::msg)?),
        (None, None) => ParseOptions::default(),
    };

    if cli.no_comments {
        options = options.comment_require(false);
    }
    if cli.no_resolve {
        options = options.require_resolve(false);
    }
    if cli.no_async {
        options = options.require_async(false);
    }
    if cli.check_length {
        options = options.check_require_length(true);
    }
    if cli.allow_non_literal {
        options = options.allow_non_literal_require(true);
    }
    Ok(options)
}
