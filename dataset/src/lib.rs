//! Builds the option price dataset a downstream learner trains on: one simulated
//! stock path, a grid of European contracts priced along it, CSV output.

pub mod asset;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod parameter_grid;
pub mod pipeline;

pub use asset::Asset;
pub use config::DatasetConfig;
pub use dataset::OptionDataset;
pub use error::DatasetError;
pub use parameter_grid::ParameterGrid;
