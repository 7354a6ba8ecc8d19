//! CLI for the Shoal array cost extractor.
//!
//! Reads the trace printed by the instrumented Green-Marl compiler and derives
//! per-array read/write cost formulas from it.

mod commands;

use anyhow::Result;
use clap::Parser;
use shoal_analysis::report::DEFAULT_HEADER_PATH;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shoal-cost")]
#[command(
    about = "Extract per-array access cost formulas from a Green-Marl trace",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Trace files to read, in order (reads stdin if none or `-`)
    traces: Vec<PathBuf>,

    /// Destination of the generated C cost header
    #[arg(long, default_value = DEFAULT_HEADER_PATH)]
    header: PathBuf,

    /// Also write the cost model as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log filter, e.g. `info` or `shoal_analysis=debug`
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(&cli.log))
        .init();

    commands::extract(&cli.traces, &cli.header, cli.json.as_deref())
}
