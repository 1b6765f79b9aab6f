//! dashboard_ui binary entry point.
//!
//! Usage:
//!   cargo run --release --package dashboard_ui
//!   cargo run --release --package dashboard_ui -- --font assets/DejaVuSans.ttf --seed 42
//!   cargo run --release --package dashboard_ui -- --config sunkist.json

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_core::{font::DEFAULT_FONT_PATH, DashboardConfig, FontResource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dashboard_ui", about = "Sunkist OS animated dashboard")]
struct Args {
    /// Font file used for every piece of text
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// JSON file overriding parts of the stock layout
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = DashboardConfig::load_or_default(args.config.as_deref())
        .context("could not load the dashboard config")?;
    // No window is opened when the font is missing.
    let font = FontResource::load(&args.font).context("could not load the UI font")?;
    let seed = args.seed.unwrap_or_else(rand::random);

    dashboard_ui::run_dashboard_app(config, seed, font);
    Ok(())
}
