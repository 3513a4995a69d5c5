use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid contract parameter '{name}': {value} ({constraint})")]
    InvalidContractParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
    #[error("time to expiration of {0} years spans no full trading day")]
    DegenerateTimeGrid(f64),
    #[error("no sample paths to evaluate")]
    EmptySample,
}
