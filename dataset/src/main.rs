//! Generates the synthetic stock and option dataset.

use std::path::PathBuf;

use clap::Parser;
use synth_dataset::pipeline;
use synth_dataset::DatasetConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Simulate a stock path and price a grid of European options along it
#[derive(Parser, Debug)]
#[command(name = "synth-dataset")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the stock path
    #[arg(long, conflicts_with = "unseeded")]
    seed: Option<u64>,

    /// Draw the stock path from a fresh entropy source
    #[arg(long)]
    unseeded: bool,

    /// Directory receiving the CSV files
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Also write one CSV file per asset
    #[arg(long)]
    export_assets: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SYNTH_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Result<DatasetConfig, synth_dataset::DatasetError> {
        let mut config = match &self.config {
            Some(path) => DatasetConfig::from_file(path)?,
            None => DatasetConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.unseeded {
            config.seed = None;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config.export_assets |= self.export_assets;
        Ok(config)
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = args.into_config()?;
    tracing::info!(seed = ?config.seed, output_dir = %config.output_dir.display(), "starting");

    let report = pipeline::run(&config)?;
    tracing::info!(
        rows = report.rows,
        options = report.options,
        train_rows = report.train_rows,
        test_rows = report.test_rows,
        path = %report.dataset_path.display(),
        "done"
    );
    Ok(())
}
