mod models;
mod payoff;

pub use models::{DerivativeParameter, TRADING_DAYS_PER_YEAR};
pub use payoff::{call_value, put_value};
