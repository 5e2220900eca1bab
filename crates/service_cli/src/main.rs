//! mc-european - Monte Carlo European Option Pricer
//!
//! Prices a European put and call on a single underlying with the
//! Black-Scholes closed form and with the Monte Carlo engine, sequentially
//! and in parallel, and reports each price with its wall-clock time.
//!
//! # Usage
//!
//! ```text
//! mc-european <NUM_PATHS> [--config <FILE>] [--seed <SEED>] [--steps <N>] [--verbose]
//! ```
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the pricer crates
//! together: `pricer_models` supplies the GBM generator and the analytical
//! reference, `pricer_pricing` supplies the engine and the payoff evaluator.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod timing;

pub use error::{CliError, Result};

use config::{CliOverrides, PricingConfig};

/// Monte Carlo European option pricer
#[derive(Parser, Debug)]
#[command(name = "mc-european")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of Monte Carlo paths (positive integer)
    #[arg(value_parser = parse_num_paths, allow_negative_numbers = true)]
    num_paths: usize,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of time steps per path
    #[arg(long)]
    steps: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            seed: self.seed,
            num_steps: self.steps,
        }
    }
}

/// Parses the path count, rejecting zero and negative values.
fn parse_num_paths(s: &str) -> std::result::Result<usize, String> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of paths", s))?;
    if value <= 0 {
        return Err("number of paths must be greater than zero".to_string());
    }
    usize::try_from(value).map_err(|_| format!("number of paths {} is too large", value))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = PricingConfig::load(cli.config.as_deref())?;
    config.merge_with_cli(&cli.overrides());

    if let Err(err) = commands::price::run(cli.num_paths, &config) {
        if err.is_internal() {
            error!("Internal pricing fault: {}", err);
        }
        return Err(err.into());
    }
    Ok(())
}
