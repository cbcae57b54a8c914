use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ensure_positive, PricingError};

/// Discounting rate used by every pricing call unless a caller passes another one.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;

pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// maturity of the contract in years, held fixed along a path
    pub maturity: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(asset_price: f64, strike: f64, maturity: f64, rfr: f64, vola: f64) -> Self {
        Self {
            asset_price,
            strike,
            maturity,
            rfr,
            vola,
        }
    }

    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.maturity).exp()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionClass {
    Call,
    Put,
}

impl OptionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionClass::Call => "call",
            OptionClass::Put => "put",
        }
    }
}

impl FromStr for OptionClass {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionClass::Call),
            "put" => Ok(OptionClass::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strike, maturity, volatility and class of one European option.
/// Only constructible through [`ContractSpec::new`], so every value in circulation is valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContractSpec {
    strike: f64,
    maturity: f64,
    vola: f64,
    option_class: OptionClass,
}

impl ContractSpec {
    pub fn new(
        strike: f64,
        maturity: f64,
        vola: f64,
        option_class: OptionClass,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            strike: ensure_positive("strike", strike)?,
            maturity: ensure_positive("maturity", maturity)?,
            vola: ensure_positive("volatility", vola)?,
            option_class,
        })
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    pub fn vola(&self) -> f64 {
        self.vola
    }

    pub fn option_class(&self) -> OptionClass {
        self.option_class
    }

    pub(crate) fn derivative_parameter(
        &self,
        asset_price: f64,
        rate: RiskFreeRate,
    ) -> DerivativeParameter {
        DerivativeParameter::new(
            asset_price,
            self.strike,
            self.maturity,
            rate.value(),
            self.vola,
        )
    }
}

/// The annualized risk-free rate, passed explicitly into every pricing call.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RiskFreeRate(f64);

impl RiskFreeRate {
    pub fn new(rate: f64) -> Result<Self, PricingError> {
        if rate.is_finite() {
            Ok(Self(rate))
        } else {
            Err(PricingError::invalid(
                "rate",
                format!("must be finite, got {}", rate),
            ))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for RiskFreeRate {
    fn default() -> Self {
        Self(DEFAULT_RISK_FREE_RATE)
    }
}
