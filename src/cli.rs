//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim: config loading,
//! request construction, running the sieve and writing the report.

use anyhow::Result;
use primesift::config::{resolve_format, resolve_segment_size, OutputFormat, SieveConfig};
use primesift::report::SieveReport;
use primesift::{cross_check, SieveRequest};
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

use super::{Cli, Commands};

/// Load config, dispatch the subcommand and write its output.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SieveConfig::parse_toml_file(path)?,
        None => SieveConfig::default(),
    };
    let format = resolve_format(cli.format, &config);

    match &cli.command {
        Commands::Check {
            limit,
            segment_size,
        } => run_check(*limit, resolve_segment_size(*segment_size, &config), format),
        command => run_request(request_for(command, &config), format, !cli.summary_only),
    }
}

/// Build the library request for a sieve subcommand.
fn request_for(cmd: &Commands, config: &SieveConfig) -> SieveRequest {
    match cmd {
        Commands::Sieve { limit } => SieveRequest::Bounded { limit: *limit },
        Commands::Root { limit } => SieveRequest::Root { limit: *limit },
        Commands::Odd { limit } => SieveRequest::Odd { limit: *limit },
        Commands::Segmented {
            limit,
            segment_size,
        } => SieveRequest::Segmented {
            limit: *limit,
            segment_size: resolve_segment_size(*segment_size, config),
        },
        Commands::Range { low, high } => SieveRequest::Range {
            low: *low,
            high: *high,
        },
        Commands::Check { .. } => unreachable!(),
    }
}

fn run_request(request: SieveRequest, format: OutputFormat, include_primes: bool) -> Result<()> {
    let started = Instant::now();
    let primes = request.run()?;
    let elapsed = started.elapsed();

    let report = SieveReport::new(request, primes, elapsed, include_primes);
    info!(
        algorithm = %report.algorithm,
        count = report.count,
        last = report.last,
        elapsed_ms = format_args!("{:.3}", report.elapsed_ms),
        "sieve complete"
    );

    let rendered = match format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report.render_json()? + "\n",
    };
    write_stdout(&rendered)
}

fn run_check(limit: u64, segment_size: u64, format: OutputFormat) -> Result<()> {
    let started = Instant::now();
    let check = cross_check(limit, segment_size)?;
    info!(
        limit,
        segment_size,
        primes = check.reference_count,
        elapsed_ms = format_args!("{:.3}", started.elapsed().as_secs_f64() * 1000.0),
        "cross-check complete"
    );

    let rendered = match format {
        OutputFormat::Text if check.agrees() => format!(
            "ok: all algorithms agree on {} primes up to {}\n",
            check.reference_count, limit
        ),
        OutputFormat::Text => String::new(),
        OutputFormat::Json => serde_json::to_string_pretty(&check)? + "\n",
    };
    write_stdout(&rendered)?;

    if !check.agrees() {
        let names: Vec<String> = check.mismatches.iter().map(|a| a.to_string()).collect();
        warn!(mismatches = %names.join(","), "cross-check failed");
        anyhow::bail!(
            "algorithms disagree with the bounded sieve up to {}: {}",
            limit,
            names.join(", ")
        );
    }
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
