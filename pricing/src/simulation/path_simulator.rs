use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_hc::Hc128Rng;
use serde::Deserialize;
use tracing::debug;

use crate::common::{PricePath, TimeGrid};
use crate::error::{ensure_positive, PricingError};
use crate::simulation::GeometricBrownianMotion;

/// Seeded generators are reproducible bit for bit, unseeded ones draw from OS entropy.
pub fn rn_generator(seed: Option<u64>) -> Hc128Rng {
    match seed {
        Some(seed_nr) => Hc128Rng::seed_from_u64(seed_nr),
        None => Hc128Rng::from_entropy(),
    }
}

/// Parameters of one simulated stock path on `[0, horizon]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathParameters {
    /// final time T, starting from zero
    pub horizon: f64,
    /// number of time steps for discretization
    pub n_steps: usize,
    /// initial price X[0]
    pub x0: f64,
    /// drift coefficient
    pub mu: f64,
    /// diffusion (volatility) coefficient
    pub sigma: f64,
}

impl Default for PathParameters {
    fn default() -> Self {
        Self {
            horizon: 1.0,
            n_steps: 1000,
            x0: 10.0,
            mu: 0.01,
            sigma: 0.5,
        }
    }
}

impl PathParameters {
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_steps < 1 {
            return Err(PricingError::invalid("n_steps", "must be >= 1, got 0"));
        }
        ensure_positive("horizon", self.horizon)?;
        ensure_positive("x0", self.x0)?;
        ensure_positive("sigma", self.sigma)?;
        if !self.mu.is_finite() {
            return Err(PricingError::invalid(
                "mu",
                format!("must be finite, got {}", self.mu),
            ));
        }
        Ok(())
    }

    pub fn dt(&self) -> f64 {
        self.horizon / self.n_steps as f64
    }

    /// Simulates one path with the caller's generator.
    /// Draws exactly `n_steps` standard normals, in step order.
    pub fn simulate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(TimeGrid, PricePath), PricingError> {
        self.validate()?;
        let time_grid = TimeGrid::uniform(self.horizon, self.n_steps)?;

        let standard_normals = Array1::random_using(self.n_steps, StandardNormal, rng);
        let gbm = GeometricBrownianMotion::new(self.mu, self.sigma, self.dt());
        let prices = gbm.generate_path(self.x0, &standard_normals);

        Ok((time_grid, PricePath::from(prices)))
    }
}

/// One realization of `dX_t = mu X_t dt + sigma X_t dW_t` on the parameters' horizon.
pub fn simulate_path(
    params: &PathParameters,
    seed: Option<u64>,
) -> Result<(TimeGrid, PricePath), PricingError> {
    params.validate()?;
    debug!(
        horizon = params.horizon,
        n_steps = params.n_steps,
        x0 = params.x0,
        mu = params.mu,
        sigma = params.sigma,
        ?seed,
        "simulating stock path"
    );
    let mut rng = rn_generator(seed);
    params.simulate_with(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn default_parameters() {
        let params = PathParameters::default();
        assert_eq!(params.horizon, 1.0);
        assert_eq!(params.n_steps, 1000);
        assert_eq!(params.x0, 10.0);
        assert_eq!(params.mu, 0.01);
        assert_eq!(params.sigma, 0.5);
        assert_approx_eq!(params.dt(), 0.001, 1e-15);
    }

    #[test]
    fn seeded_reference_path() {
        let params = PathParameters::default();
        let (time_grid, prices) = simulate_path(&params, Some(55)).unwrap();
        assert_eq!(time_grid.len(), 1001);
        assert_eq!(prices.len(), 1001);
        assert_eq!(prices.first(), Some(10.0));
        assert_eq!(time_grid.points()[0], 0.0);
        assert_eq!(time_grid.horizon(), 1.0);

        // Hc128Rng::seed_from_u64(55), StandardNormal drawn in step order
        assert_eq!(prices.get(1).unwrap().to_bits(), 0x4023ce80bc896827); // 9.903325931332871
        assert_eq!(prices.get(500).unwrap().to_bits(), 0x40249af3c4677c92); // 10.302641046173708
        assert_eq!(prices.last().unwrap().to_bits(), 0x401aeed4989af767); // 6.7332328648170465

        let (time_grid_again, prices_again) = simulate_path(&params, Some(55)).unwrap();
        assert_eq!(time_grid, time_grid_again);
        assert_eq!(prices, prices_again);
    }

    #[test]
    fn different_seeds_differ() {
        let params = PathParameters::default();
        let (_, a) = simulate_path(&params, Some(1)).unwrap();
        let (_, b) = simulate_path(&params, Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unseeded_paths_are_fresh() {
        let params = PathParameters::default();
        let (_, a) = simulate_path(&params, None).unwrap();
        let (_, b) = simulate_path(&params, None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn caller_generator_matches_seed() {
        let params = PathParameters {
            n_steps: 50,
            ..PathParameters::default()
        };
        let mut rng = rn_generator(Some(7));
        let (_, with_rng) = params.simulate_with(&mut rng).unwrap();
        let (_, with_seed) = simulate_path(&params, Some(7)).unwrap();
        assert_eq!(with_rng, with_seed);
    }

    #[test]
    fn invalid_parameters() {
        let base = PathParameters::default();
        let cases = [
            (PathParameters { n_steps: 0, ..base.clone() }, "n_steps"),
            (PathParameters { horizon: 0.0, ..base.clone() }, "horizon"),
            (PathParameters { x0: -1.0, ..base.clone() }, "x0"),
            (PathParameters { sigma: 0.0, ..base.clone() }, "sigma"),
            (PathParameters { mu: f64::NAN, ..base.clone() }, "mu"),
        ];
        for (params, field) in cases {
            match simulate_path(&params, Some(1)) {
                Err(PricingError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("expected InvalidParameter for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn log_returns_mean() {
        // E[ln(X_T / x0)] = (mu - sigma^2 / 2) T
        let params = PathParameters {
            horizon: 2.0,
            n_steps: 20,
            x0: 100.0,
            mu: 0.05,
            sigma: 0.3,
        };
        let mut rng = rn_generator(Some(41));
        let nr_paths = 20_000;
        let total: f64 = (0..nr_paths)
            .map(|_| {
                let (_, prices) = params.simulate_with(&mut rng).unwrap();
                (prices.last().unwrap() / params.x0).ln()
            })
            .sum();
        let expected = (0.05 - 0.045) * 2.0;
        assert_approx_eq!(total / nr_paths as f64, expected, 2e-2);
    }

    proptest! {
        #[test]
        fn paths_are_deterministic_and_positive(
            horizon in 0.01_f64..5.0,
            n_steps in 1_usize..300,
            x0 in 0.01_f64..1_000.0,
            mu in -1.0_f64..1.0,
            sigma in 0.01_f64..1.5,
            seed in any::<u64>(),
        ) {
            let params = PathParameters { horizon, n_steps, x0, mu, sigma };
            let (grid, prices) = simulate_path(&params, Some(seed)).unwrap();
            let (grid_again, prices_again) = simulate_path(&params, Some(seed)).unwrap();

            prop_assert_eq!(grid.len(), n_steps + 1);
            prop_assert_eq!(prices.len(), n_steps + 1);
            prop_assert_eq!(&grid, &grid_again);
            prop_assert_eq!(&prices, &prices_again);
            prop_assert!(prices.iter().all(|p| *p > 0.0 && p.is_finite()));
        }
    }
}
