use synth_pricing::PricingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("parameter grid axis `{0}` is empty")]
    EmptyParameterGrid(&'static str),
    #[error("train fraction must lie strictly between 0 and 1, got {0}")]
    InvalidSplit(f64),
    #[error("series length mismatch: {expected} grid points, {found} prices")]
    LengthMismatch { expected: usize, found: usize },
    #[error("{0} is not on the dataset's time grid")]
    GridMismatch(String),
    #[error("row {0} is missing values")]
    IncompleteRow(usize),
    #[error("a {0} cannot serve as underlying")]
    NotAnUnderlying(&'static str),
}
