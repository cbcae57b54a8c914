use rayon::prelude::*;
use tracing::debug;

use crate::analytic::black_scholes::{BlackScholesMerton, OptionPrice};
use crate::common::{ContractSpec, PricePath, RiskFreeRate, TimeGrid};
use crate::error::PricingError;

fn validate_underlying(time_grid: &TimeGrid, underlying: &PricePath) -> Result<(), PricingError> {
    if time_grid.len() != underlying.len() {
        return Err(PricingError::invalid(
            "underlying",
            format!(
                "has {} prices for {} grid points",
                underlying.len(),
                time_grid.len()
            ),
        ));
    }
    if let Some((i, p)) = underlying
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(PricingError::invalid(
            "underlying",
            format!("price at index {} must be finite and > 0, got {}", i, p),
        ));
    }
    Ok(())
}

/// Black-Scholes value of `contract` at every point of `underlying`.
///
/// The contract's maturity is the same at every grid point; it does not shrink as
/// time advances along the path. The grid only has to line up with the prices.
pub fn price_path(
    time_grid: &TimeGrid,
    underlying: &PricePath,
    contract: &ContractSpec,
    rate: RiskFreeRate,
) -> Result<PricePath, PricingError> {
    validate_underlying(time_grid, underlying)?;
    price_validated(underlying, contract, rate)
}

/// Prices every contract against the same underlying, one rayon task per contract.
/// Output order follows `contracts`; the first failing contract in that order wins.
pub fn price_contracts(
    time_grid: &TimeGrid,
    underlying: &PricePath,
    contracts: &[ContractSpec],
    rate: RiskFreeRate,
) -> Result<Vec<PricePath>, PricingError> {
    validate_underlying(time_grid, underlying)?;
    let priced: Vec<Result<PricePath, PricingError>> = contracts
        .par_iter()
        .map(|contract| price_validated(underlying, contract, rate))
        .collect();
    priced.into_iter().collect()
}

/// Expects `underlying` to have passed `validate_underlying`.
fn price_validated(
    underlying: &PricePath,
    contract: &ContractSpec,
    rate: RiskFreeRate,
) -> Result<PricePath, PricingError> {
    debug!(
        strike = contract.strike(),
        maturity = contract.maturity(),
        vola = contract.vola(),
        option_class = %contract.option_class(),
        rate = rate.value(),
        points = underlying.len(),
        "pricing option path"
    );

    let option_class = contract.option_class();
    let prices = underlying.values().mapv(|s| {
        let dp = contract.derivative_parameter(s, rate);
        BlackScholesMerton::price(option_class, &dp)
    });

    if let Some((index, value)) = prices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PricingError::NumericDegenerate {
            index,
            value: *value,
        });
    }
    Ok(PricePath::from(prices))
}
