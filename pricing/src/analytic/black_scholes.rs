use probability::distribution::{Distribution, Gaussian};

use crate::common::models::{DerivativeParameter, OptionClass, RiskFreeRate};
use crate::common::ContractSpec;
use crate::error::{ensure_positive, PricingError};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;

    fn price(option_class: OptionClass, params: &Self::Params) -> f64 {
        match option_class {
            OptionClass::Call => Self::call(params),
            OptionClass::Put => Self::put(params),
        }
    }
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// Inputs are not checked here; a result may come out a few ulps below zero
/// for contracts far out of the money, which is rounding and not clamped.
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.maturity.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.maturity)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d1_d2(dp);
        cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * dp.discount_factor()
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d1_d2(dp);
        cdf(-d2) * dp.strike * dp.discount_factor() - cdf(-d1) * dp.asset_price
    }
}

/// Theoretical value of a single European option for an underlying at `asset_price`.
pub fn black_scholes_price(
    asset_price: f64,
    contract: &ContractSpec,
    rate: RiskFreeRate,
) -> Result<f64, PricingError> {
    let asset_price = ensure_positive("asset_price", asset_price)?;
    let dp = contract.derivative_parameter(asset_price, rate);
    let value = BlackScholesMerton::price(contract.option_class(), &dp);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NumericDegenerate { index: 0, value })
    }
}
