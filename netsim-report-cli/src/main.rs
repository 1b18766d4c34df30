//! Network Simulation Report CLI
//!
//! Reads `results.csv` from the working directory and writes
//! `throughput.png`, `delay.png` and `loss.png` next to it using the
//! netsim-metrics library. File and column names are fixed; the flags only
//! control diagnostics on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use netsim_metrics::{ReportConfig, ReportGenerator};

/// Network Simulation Report - Plot throughput, delay and loss over time
#[derive(Parser, Debug)]
#[command(name = "netsim-report")]
#[command(about = "Render results.csv into throughput, delay and loss charts", long_about = None)]
#[command(version)]
struct Args {
    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Network Simulation Report v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using metrics library v{}", netsim_metrics::VERSION);

    let config = ReportConfig::default();
    let report = ReportGenerator::new(config.clone())
        .run()
        .with_context(|| format!("Failed to generate report from {:?}", config.input))?;

    log::info!("Report generated from {}", report.stats);
    println!("{}", report.completion_message());

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
