//! # Main — `primesift` Command Line
//!
//! Thin caller over the library sieves: parses arguments, loads the optional
//! TOML config, runs one sieve and writes the result to stdout. Logs go to
//! stderr so piped prime lists stay clean.
//!
//! ## Global Options
//!
//! - `--config` / `PRIMESIFT_CONFIG`: TOML file with `segment_size` and `format`.
//! - `--format`: `text` (one prime per line) or `json` (full report).
//! - `--summary-only`: report counts and bounds without the prime list.
//!
//! ## Environment
//!
//! - `LOG_FORMAT=json`: JSON log lines instead of human-readable output.
//! - `RUST_LOG`: log filter (default `info`).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use primesift::config::OutputFormat;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primesift", about = "Enumerate primes with segmented sieves")]
struct Cli {
    /// Path to a TOML config file (segment_size, format)
    #[arg(long, env = "PRIMESIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: text or json (default: config file, then text)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Print counts and bounds only, not the prime list
    #[arg(long)]
    summary_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Primes up to a limit with the flat sieve
    Sieve {
        /// Inclusive upper bound
        #[arg(long)]
        limit: u64,
    },
    /// Primes up to a limit with the base-prime sieve (pass the root yourself)
    Root {
        /// Inclusive upper bound
        #[arg(long)]
        limit: u64,
    },
    /// Primes up to a limit with the odd-only sieve
    Odd {
        /// Inclusive upper bound
        #[arg(long)]
        limit: u64,
    },
    /// Primes up to a limit, sieved in fixed-size blocks
    Segmented {
        /// Inclusive upper bound
        #[arg(long)]
        limit: u64,
        /// Integers per block (default: config file, then 32768)
        #[arg(long, env = "PRIMESIFT_SEGMENT_SIZE")]
        segment_size: Option<u64>,
    },
    /// Primes in the inclusive interval [low, high]
    Range {
        /// Inclusive lower bound
        #[arg(long)]
        low: u64,
        /// Inclusive upper bound
        #[arg(long)]
        high: u64,
    },
    /// Run every algorithm up to a limit and verify they agree
    Check {
        /// Inclusive upper bound
        #[arg(long)]
        limit: u64,
        /// Block width for the segmented sieve (default: config file, then 32768)
        #[arg(long, env = "PRIMESIFT_SEGMENT_SIZE")]
        segment_size: Option<u64>,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // LOG_FORMAT=json for log shippers, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::run(&cli)
}
