pub mod models;
pub mod series;

pub use models::{ContractSpec, DerivativeParameter, OptionClass, RiskFreeRate};
pub use series::{PricePath, TimeGrid};
