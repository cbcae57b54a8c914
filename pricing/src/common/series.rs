use std::sync::Arc;

use ndarray::Array1;

use crate::error::{ensure_positive, PricingError};

/// Strictly increasing observation times starting at 0.
/// Clones share the same storage, so every series derived from one simulation
/// can point at a single grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid(Arc<Array1<f64>>);

impl TimeGrid {
    /// `n_steps + 1` equally spaced points on `[0, horizon]`, both ends included.
    pub fn uniform(horizon: f64, n_steps: usize) -> Result<Self, PricingError> {
        let horizon = ensure_positive("horizon", horizon)?;
        if n_steps < 1 {
            return Err(PricingError::invalid("n_steps", "must be >= 1, got 0"));
        }
        let dt = horizon / n_steps as f64;
        let points = Array1::from_shape_fn(n_steps + 1, |i| {
            if i == n_steps {
                horizon
            } else {
                i as f64 * dt
            }
        });
        Ok(Self(Arc::new(points)))
    }

    /// Grid from externally supplied times, e.g. a column read back from disk.
    pub fn from_points(points: Vec<f64>) -> Result<Self, PricingError> {
        match points.first() {
            Some(&t0) if t0 == 0.0 => {}
            Some(&t0) => {
                return Err(PricingError::invalid(
                    "time_grid",
                    format!("must start at 0, starts at {}", t0),
                ))
            }
            None => return Err(PricingError::invalid("time_grid", "is empty")),
        }
        if let Some(i) = points.windows(2).position(|w| w[1] <= w[0] || !w[1].is_finite()) {
            return Err(PricingError::invalid(
                "time_grid",
                format!("not strictly increasing at index {}", i + 1),
            ));
        }
        Ok(Self(Arc::new(Array1::from(points))))
    }

    pub fn points(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn horizon(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Whether both grids are backed by the very same allocation.
    pub fn shares_storage(&self, other: &TimeGrid) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Prices observed on a [`TimeGrid`], one per grid point.
#[derive(Clone, Debug, PartialEq)]
pub struct PricePath(Array1<f64>);

impl PricePath {
    pub fn values(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.get(0)
    }

    pub fn last(&self) -> Option<f64> {
        self.0.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl From<Vec<f64>> for PricePath {
    fn from(prices: Vec<f64>) -> Self {
        Self(Array1::from(prices))
    }
}

impl From<Array1<f64>> for PricePath {
    fn from(prices: Array1<f64>) -> Self {
        Self(prices)
    }
}
