use std::path::PathBuf;

use pricing::common::DerivativeParameter;
use pricing::error::PricingError;

/// Knobs of the convergence study. The defaults describe a slightly
/// out-of-the-money call with ~41 trading days left to expiration.
pub struct StudyConfig {
    /// spot price of the underlying asset
    pub asset_price: f64,
    /// exercise price of the call
    pub strike: f64,
    /// annualized risk-free interest rate
    pub rfr: f64,
    /// annualized volatility of the underlying
    pub vola: f64,
    /// time to expiration in years
    pub time_to_expiration: f64,
    /// path count for the single head-to-head comparison (and the path plots)
    pub comparison_paths: usize,
    /// path counts swept to trace the convergence error curve
    pub sweep_path_counts: Vec<usize>,
    /// base seed; each sweep entry derives its own seed from it
    pub seed_nr: u64,
    /// where the rendered report lands
    pub report_path: PathBuf,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            asset_price: 1200.0,
            strike: 1220.0,
            rfr: 0.0014,
            vola: 0.2121,
            time_to_expiration: 0.1616,
            comparison_paths: 1000,
            sweep_path_counts: vec![
                100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1250, 1500, 1750, 2000, 2250,
                2500, 2750, 3000,
            ],
            seed_nr: 42,
            report_path: PathBuf::from("convergence_report.html"),
        }
    }
}

impl StudyConfig {
    pub fn contract(&self) -> Result<DerivativeParameter, PricingError> {
        DerivativeParameter::new(
            self.asset_price,
            self.strike,
            self.time_to_expiration,
            self.rfr,
            self.vola,
        )
    }
}
