mod black_scholes;
mod option_path;

pub use black_scholes::{black_scholes_price, BlackScholesMerton, OptionPrice};
pub use option_path::{price_contracts, price_path};
