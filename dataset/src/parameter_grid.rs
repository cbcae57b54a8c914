use serde::Deserialize;
use synth_pricing::common::{ContractSpec, OptionClass};
use tracing::warn;

use crate::error::DatasetError;

/// Axes of the contract family priced off one stock path.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParameterGrid {
    pub strikes: Vec<f64>,
    pub maturities: Vec<f64>,
    pub volatilities: Vec<f64>,
    pub option_classes: Vec<OptionClass>,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        Self {
            strikes: vec![8.0, 10.0, 12.0],
            maturities: vec![0.5, 0.75],
            volatilities: vec![0.2, 0.3, 0.5],
            option_classes: vec![OptionClass::Call, OptionClass::Put],
        }
    }
}

impl ParameterGrid {
    pub fn len(&self) -> usize {
        self.strikes.len()
            * self.maturities.len()
            * self.volatilities.len()
            * self.option_classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cartesian product, strike outermost and option class innermost.
    pub fn contracts(&self) -> Result<Vec<ContractSpec>, DatasetError> {
        let axes = [
            ("strikes", self.strikes.is_empty()),
            ("maturities", self.maturities.is_empty()),
            ("volatilities", self.volatilities.is_empty()),
            ("option_classes", self.option_classes.is_empty()),
        ];
        if let Some(&(axis, _)) = axes.iter().find(|(_, empty)| *empty) {
            warn!(axis, "parameter grid axis is empty");
            return Err(DatasetError::EmptyParameterGrid(axis));
        }

        let mut contracts = Vec::with_capacity(self.len());
        for &strike in &self.strikes {
            for &maturity in &self.maturities {
                for &vola in &self.volatilities {
                    for &option_class in &self.option_classes {
                        let contract = ContractSpec::new(strike, maturity, vola, option_class)
                            .map_err(|err| {
                                warn!(
                                    strike,
                                    maturity,
                                    vola,
                                    %option_class,
                                    %err,
                                    "rejected contract"
                                );
                                err
                            })?;
                        contracts.push(contract);
                    }
                }
            }
        }
        Ok(contracts)
    }
}
