//! Synthetic stock paths under geometric Brownian motion and the Black-Scholes
//! values of European options along them.
//!
//! ```
//! use synth_pricing::analytic::price_path;
//! use synth_pricing::common::{ContractSpec, OptionClass, RiskFreeRate};
//! use synth_pricing::simulation::{simulate_path, PathParameters};
//!
//! let (time_grid, stock) = simulate_path(&PathParameters::default(), Some(55)).unwrap();
//! let call = ContractSpec::new(10.0, 0.5, 0.2, OptionClass::Call).unwrap();
//! let calls = price_path(&time_grid, &stock, &call, RiskFreeRate::default()).unwrap();
//! assert_eq!(calls.len(), time_grid.len());
//! ```

pub mod analytic;
pub mod common;
pub mod error;
pub mod simulation;

pub use error::PricingError;
