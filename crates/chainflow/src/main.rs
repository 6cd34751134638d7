//! ChainFlow command-line entry point.
//!
//! Runs the flow described by `--config`, or an empty flow when no file
//! is given.

use std::path::PathBuf;

use anyhow::Context;
use chainflow::{ChainFlow, FlowConfig};
use clap::Parser;

/// Run a chain of steps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Flow definition file (TOML)
    #[arg(short, long, env = "CHAINFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let flow = match &args.config {
        Some(path) => FlowConfig::load(path)
            .and_then(|config| config.build())
            .with_context(|| format!("failed to load flow from {}", path.display()))?,
        None => {
            tracing::info!("No flow definition given, running an empty flow");
            ChainFlow::new()
        }
    };

    let report = flow.execute()?;

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!(
            "{}: {} ({} step(s) executed)",
            report.name,
            report.state,
            report.records.len()
        );
    }

    if let Some(failed) = report.failed_step() {
        tracing::error!(step_id = %failed.step_id, "Flow failed");
        return Err(anyhow::anyhow!(
            "flow '{}' failed at step '{}'",
            report.name,
            failed.step_id
        ));
    }

    Ok(())
}
