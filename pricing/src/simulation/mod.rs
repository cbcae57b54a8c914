mod gbm;
mod path_simulator;

pub use gbm::GeometricBrownianMotion;
pub use path_simulator::{rn_generator, simulate_path, PathParameters};
