mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use kundali_config::KundaliConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    if let Err(error) = run() {
        eprintln!("kundali error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KundaliConfig::load_from(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => KundaliConfig::load().context("failed to load configuration")?,
    };
    init_tracing(cli.quiet, cli.verbose, &config.output.log_level)?;

    let output = match &cli.command {
        Commands::Chart(args) => commands::chart(args, &config)?,
        Commands::Rashi { lon } => commands::rashi(*lon),
        Commands::Nakshatra { lon } => commands::nakshatra(*lon),
        Commands::Dms { deg } => commands::dms(*deg),
        Commands::Varga { lon, varga } => commands::varga(*lon, *varga),
        Commands::Dasha { moon, birth } => commands::dasha(*moon, birth)?,
        Commands::Panchang { sun, moon, date } => commands::panchang(*sun, *moon, date)?,
    };
    println!("{output}");
    Ok(())
}

/// `KUNDALI_LOG` wins, then `-q`/`-v`, then the configured level.
fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = EnvFilter::try_from_env("KUNDALI_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
