//! erp-convert - CLI tool to convert the ERP XML export to JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use erp_convert_rs::{ConverterConfig, DataConverter};

/// Convert client, article and order history XML exports to normalized JSON.
#[derive(Parser, Debug)]
#[command(name = "erp-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the `susko.ai` export; outputs are written here too
    #[arg(short, long, default_value = ".")]
    base_path: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.base_path.display());

    let mut converter = DataConverter::new(ConverterConfig::new(&args.base_path));
    let summary = converter
        .convert_all()
        .with_context(|| format!("Failed to convert {}", args.base_path.display()));

    if let Err(e) = &summary {
        error!("Fatal error during conversion: {:#}", e);
    }
    summary.map(|_| ())
}
