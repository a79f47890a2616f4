//! drillbook command-line runner
//!
//! Reads one JSON document, applies a record utility to it and prints the
//! JSON result on stdout. Logs go to stderr.
//!
//! Usage:
//!   drillbook total-price --input cart.json
//!   echo '"hi"' | drillbook format-value

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use drillbook_cli::{read_input, run, Operation};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "drillbook")]
#[command(about = "Run drillbook record utilities over JSON input")]
struct Args {
    #[command(subcommand)]
    operation: Operation,

    /// Path to the input JSON document (stdin when omitted)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let raw = read_input(args.input.as_deref())?;
    let output = run(args.operation, &raw)?;
    info!("{:?} finished", args.operation);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);
    Ok(())
}
