//! CLI entry point for the narc-fetch tool.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use narc_fetch_core::{Endpoints, RunOptions, run};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "warn"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let output_dir = match args.output_dir {
        Some(dir) => std::path::absolute(dir)?,
        None => std::env::current_dir()?,
    };

    let options = RunOptions {
        series: args.series,
        items: args.items,
        sections: args.sections,
        output_dir,
        identifiers_as_names: args.identifiers_as_names,
        overwrite: args.overwrite,
        // Negative or non-finite waits degrade to no pacing.
        wait: Duration::try_from_secs_f64(args.wait).unwrap_or(Duration::ZERO),
        endpoints: Endpoints::default(),
    };

    let stats = run(&options).await;

    info!(
        downloaded = stats.downloaded,
        skipped = stats.skipped,
        failed = stats.failed,
        "narc-fetch finished"
    );

    Ok(())
}
