use crate::error::PricingError;

/// Trading days per year; price paths move only on trading days.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    /// Both pricers assume strictly positive prices, volatility and time to expiration;
    /// anything else would put NaNs through the d1/d2 logs and square roots.
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Result<Self, PricingError> {
        Self::require_positive("asset_price", asset_price)?;
        Self::require_positive("strike", strike)?;
        Self::require_positive("time_to_expiration", time_to_expiration)?;
        Self::require_positive("vola", vola)?;
        if !rfr.is_finite() {
            return Err(PricingError::InvalidContractParameter {
                name: "rfr",
                value: rfr,
                constraint: "must be finite",
            });
        }
        Ok(Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        })
    }

    fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidContractParameter {
                name,
                value,
                constraint: "must be finite and > 0",
            })
        }
    }

    /// Number of daily steps on the trading-day grid until expiration.
    /// A horizon shorter than one trading day has no valid grid and is rejected.
    pub fn trading_steps(&self) -> Result<usize, PricingError> {
        let nr_steps = (self.time_to_expiration * TRADING_DAYS_PER_YEAR).floor() as usize;
        if nr_steps == 0 {
            return Err(PricingError::DegenerateTimeGrid(self.time_to_expiration));
        }
        Ok(nr_steps)
    }

    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_contract() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert!(dp.is_ok());
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(DerivativeParameter::new(0.0, 250.0, 1.0, 0.03, 0.15).is_err());
        assert!(DerivativeParameter::new(300.0, -250.0, 1.0, 0.03, 0.15).is_err());
        assert!(DerivativeParameter::new(300.0, 250.0, 0.0, 0.03, 0.15).is_err());
        assert!(DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.0).is_err());
        assert!(DerivativeParameter::new(300.0, 250.0, 1.0, f64::NAN, 0.15).is_err());
    }

    #[test]
    fn trading_steps_on_daily_grid() {
        // 0.1616 years ~ 40.72 trading days
        let dp = DerivativeParameter::new(1200.0, 1220.0, 0.1616, 0.0014, 0.2121).unwrap();
        assert_eq!(dp.trading_steps().unwrap(), 40);

        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.01, 0.2).unwrap();
        assert_eq!(dp.trading_steps().unwrap(), 252);
    }

    #[test]
    fn rejects_sub_day_horizon() {
        let dp = DerivativeParameter::new(100.0, 100.0, 0.003, 0.01, 0.2).unwrap();
        assert_eq!(
            dp.trading_steps(),
            Err(PricingError::DegenerateTimeGrid(0.003))
        );
    }
}
