//! syncomp-is - InputSense command line tool
//!
//! Analyzes one sensory input per run and prints the musical parameters
//! derived from it. With `--save` the result is recorded as a composition
//! and appended to the library file.

use anyhow::{Context, Result};
use clap::Parser;
use syncomp_common::config::ConfigResolver;
use syncomp_common::logging::init_tracing;
use syncomp_is::cli::{execute, Args};
use tracing::debug;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigResolver::new(args.config.clone())
        .load()
        .context("Failed to load configuration")?;
    init_tracing(&config.logging).context("Failed to initialize logging")?;
    debug!("Configuration: {:?}", config);

    execute(args, &config, std::io::stdin().lock(), &mut std::io::stdout().lock())
}
