use ndarray::Array1;

/// Model params for the SDE
/// '''math
/// dS_t / S_t = mu dt + sigma dW_t
/// ''', where $dW_t ~ N(0, sqrt(dt))$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
#[derive(Clone, Debug)]
pub struct GeometricBrownianMotion {
    /// drift term
    mu: f64,
    /// volatility
    sigma: f64,
    /// change in time
    dt: f64,
}

impl GeometricBrownianMotion {
    pub fn new(drift: f64, vola: f64, dt: f64) -> Self {
        Self {
            mu: drift,
            sigma: vola,
            dt,
        }
    }

    /// Exact solution over one time step; positive whenever `st` is.
    /// See https://en.wikipedia.org/wiki/Geometric_Brownian_motion
    #[inline]
    pub fn step_analytic(&self, st: f64, z: f64) -> f64 {
        let ret = self.dt * (self.mu - self.sigma.powi(2) / 2.0) + self.dt.sqrt() * self.sigma * z;
        st * ret.exp()
    }

    /// Path of `standard_normals.len() + 1` prices starting at `initial_value`.
    pub fn generate_path(&self, initial_value: f64, standard_normals: &Array1<f64>) -> Array1<f64> {
        let mut path = Vec::with_capacity(standard_normals.len() + 1);

        let mut curr_p = initial_value;
        path.push(curr_p);

        for z in standard_normals {
            curr_p = self.step_analytic(curr_p, *z);
            path.push(curr_p);
        }

        Array1::from(path)
    }
}
