use std::fmt;

use synth_pricing::analytic::price_contracts;
use synth_pricing::common::{ContractSpec, OptionClass, PricePath, RiskFreeRate, TimeGrid};

use crate::error::DatasetError;

/// A priced series tagged with what it is.
/// Options keep the contract they were priced with; nothing else depends on the tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Asset {
    Stock {
        time_grid: TimeGrid,
        prices: PricePath,
    },
    CallOption {
        time_grid: TimeGrid,
        prices: PricePath,
        contract: ContractSpec,
    },
    PutOption {
        time_grid: TimeGrid,
        prices: PricePath,
        contract: ContractSpec,
    },
}

fn check_lengths(time_grid: &TimeGrid, prices: &PricePath) -> Result<(), DatasetError> {
    if time_grid.len() != prices.len() {
        return Err(DatasetError::LengthMismatch {
            expected: time_grid.len(),
            found: prices.len(),
        });
    }
    Ok(())
}

impl Asset {
    pub fn stock(time_grid: TimeGrid, prices: PricePath) -> Result<Self, DatasetError> {
        check_lengths(&time_grid, &prices)?;
        Ok(Asset::Stock { time_grid, prices })
    }

    /// Tags the series as call or put according to the contract's class.
    pub fn option(
        time_grid: TimeGrid,
        prices: PricePath,
        contract: ContractSpec,
    ) -> Result<Self, DatasetError> {
        check_lengths(&time_grid, &prices)?;
        Ok(match contract.option_class() {
            OptionClass::Call => Asset::CallOption {
                time_grid,
                prices,
                contract,
            },
            OptionClass::Put => Asset::PutOption {
                time_grid,
                prices,
                contract,
            },
        })
    }

    pub fn time_grid(&self) -> &TimeGrid {
        match self {
            Asset::Stock { time_grid, .. }
            | Asset::CallOption { time_grid, .. }
            | Asset::PutOption { time_grid, .. } => time_grid,
        }
    }

    pub fn prices(&self) -> &PricePath {
        match self {
            Asset::Stock { prices, .. }
            | Asset::CallOption { prices, .. }
            | Asset::PutOption { prices, .. } => prices,
        }
    }

    pub fn contract(&self) -> Option<&ContractSpec> {
        match self {
            Asset::Stock { .. } => None,
            Asset::CallOption { contract, .. } | Asset::PutOption { contract, .. } => {
                Some(contract)
            }
        }
    }

    pub fn asset_type(&self) -> &'static str {
        match self {
            Asset::Stock { .. } => "Stock",
            Asset::CallOption { .. } => "Call Option",
            Asset::PutOption { .. } => "Put Option",
        }
    }

    /// Prices every contract off this stock; all results share the stock's grid.
    pub fn derive_options(
        &self,
        contracts: &[ContractSpec],
        rate: RiskFreeRate,
    ) -> Result<Vec<Asset>, DatasetError> {
        let (time_grid, prices) = match self {
            Asset::Stock { time_grid, prices } => (time_grid, prices),
            other => return Err(DatasetError::NotAnUnderlying(other.asset_type())),
        };
        price_contracts(time_grid, prices, contracts, rate)?
            .into_iter()
            .zip(contracts)
            .map(|(option_prices, contract)| {
                Asset::option(time_grid.clone(), option_prices, *contract)
            })
            .collect()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset type: {}", self.asset_type())
    }
}
