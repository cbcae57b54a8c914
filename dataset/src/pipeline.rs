use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use synth_pricing::simulation::simulate_path;
use tracing::info;

use crate::asset::Asset;
use crate::config::DatasetConfig;
use crate::dataset::OptionDataset;
use crate::error::DatasetError;
use crate::export::export_asset;

pub const DATASET_FILE: &str = "dataset.csv";

#[derive(Debug)]
pub struct PipelineReport {
    pub dataset_path: PathBuf,
    pub rows: usize,
    pub options: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub exported: Vec<PathBuf>,
}

/// Simulates the stock and prices the whole contract grid, without touching the disk.
pub fn generate(config: &DatasetConfig) -> Result<(Asset, OptionDataset), DatasetError> {
    config.validate()?;

    let start = Instant::now();
    let (time_grid, prices) = simulate_path(&config.simulation, config.seed)?;
    let stock = Asset::stock(time_grid, prices)?;
    info!(
        points = stock.prices().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "simulated stock path"
    );

    let start = Instant::now();
    let contracts = config.contracts.contracts()?;
    let dataset = OptionDataset::build(&stock, &contracts, config.rate)?;
    info!(
        options = dataset.options().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "priced option paths"
    );

    Ok((stock, dataset))
}

/// Runs [`generate`] and writes the dataset, plus every single asset when asked to.
pub fn run(config: &DatasetConfig) -> Result<PipelineReport, DatasetError> {
    let (stock, dataset) = generate(config)?;

    fs::create_dir_all(&config.output_dir)?;
    let dataset_path = config.output_dir.join(DATASET_FILE);
    dataset.write_csv(BufWriter::new(File::create(&dataset_path)?))?;
    info!(path = %dataset_path.display(), "wrote dataset");

    let mut exported = Vec::new();
    if config.export_assets {
        exported.push(export_asset(&stock, &config.output_dir, Some("Stock Price"))?);
        for (i, option) in dataset.options().iter().enumerate() {
            let name = format!("{} {:03}", option.asset_type(), i + 1);
            exported.push(export_asset(option, &config.output_dir, Some(&name))?);
        }
        info!(files = exported.len(), "exported assets");
    }

    let (train, test) = dataset.split(config.train_fraction)?;
    info!(
        train_rows = train.len(),
        test_rows = test.len(),
        "split rows for the learner"
    );

    Ok(PipelineReport {
        dataset_path,
        rows: dataset.rows(),
        options: dataset.options().len(),
        train_rows: train.len(),
        test_rows: test.len(),
        exported,
    })
}
