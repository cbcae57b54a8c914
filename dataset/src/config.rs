use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use synth_pricing::common::RiskFreeRate;
use synth_pricing::simulation::PathParameters;

use crate::error::DatasetError;
use crate::parameter_grid::ParameterGrid;

pub const DEFAULT_SEED: u64 = 55;

/// Everything one dataset run needs. Keys missing from a TOML file keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub seed: Option<u64>,
    pub rate: RiskFreeRate,
    pub simulation: PathParameters,
    pub contracts: ParameterGrid,
    pub output_dir: PathBuf,
    pub train_fraction: f64,
    pub export_assets: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: Some(DEFAULT_SEED),
            rate: RiskFreeRate::default(),
            simulation: PathParameters::default(),
            contracts: ParameterGrid::default(),
            output_dir: PathBuf::from("./data"),
            train_fraction: 0.8,
            export_assets: false,
        }
    }
}

impl DatasetConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, DatasetError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Checks every section before anything is simulated or written.
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.simulation.validate()?;
        RiskFreeRate::new(self.rate.value())?;
        self.contracts.contracts()?;
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(DatasetError::InvalidSplit(self.train_fraction));
        }
        Ok(())
    }
}
