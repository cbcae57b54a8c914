use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("invalid option type `{0}`, expected `call` or `put`")]
    InvalidOptionType(String),
    /// A computed value is NaN or infinite although all inputs passed validation.
    #[error("degenerate value {value} at path index {index}")]
    NumericDegenerate { index: usize, value: f64 },
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(
            name,
            format!("must be finite and > 0, got {}", value),
        ))
    }
}
