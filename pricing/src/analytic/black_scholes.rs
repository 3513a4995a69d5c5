use crate::common::DerivativeParameter;
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * dp.discount_factor()
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        cdf(-d2) * dp.strike * dp.discount_factor() - cdf(-d1) * dp.asset_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn normal_cdf() {
        let center_value = cdf(0.0);
        assert_eq!(center_value, 0.5);

        let sigma_top = cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413, 0.0001); // table value for 1.0
    }

    #[test]
    fn european_call() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15).unwrap();
        assert_approx_eq!(BlackScholesMerton::call(&dp), 58.8197, TOLERANCE);

        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25).unwrap();
        assert_approx_eq!(BlackScholesMerton::call(&dp), 113.4155, TOLERANCE);
    }

    #[test]
    fn european_put() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15).unwrap();
        assert_approx_eq!(BlackScholesMerton::put(&dp), 1.4311, TOLERANCE);

        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25).unwrap();
        assert_approx_eq!(BlackScholesMerton::put(&dp), 13.2797, TOLERANCE);
    }

    #[test]
    fn european_put_call_parity() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15).unwrap();
        let put_call_parity = BlackScholesMerton::call(&dp) - BlackScholesMerton::put(&dp);
        assert_eq!(
            put_call_parity,
            dp.asset_price - dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
        );
    }

    #[test]
    fn deterministic_for_equal_parameters() {
        let dp = DerivativeParameter::new(1200.0, 1220.0, 0.1616, 0.0014, 0.2121).unwrap();
        let first = BlackScholesMerton::call(&dp);
        for _ in 0..10 {
            assert_eq!(BlackScholesMerton::call(&dp), first);
        }
    }

    #[test]
    fn near_the_money_short_dated_call() {
        // slightly out of the money, ~41 trading days to expiration
        let dp = DerivativeParameter::new(1200.0, 1220.0, 0.1616, 0.0014, 0.2121).unwrap();
        let call = BlackScholesMerton::call(&dp);
        assert!((30.0..45.0).contains(&call));
        assert_approx_eq!(call, 32.03, 0.1);
    }

    #[test]
    fn asymptotic_behaviour_in_spot() {
        let strike = 250.0;
        let tte = 1.0;
        let rfr = 0.03;

        // deep in the money the call behaves like a forward on the asset
        let dp = DerivativeParameter::new(1.0e6, strike, tte, rfr, 0.15).unwrap();
        let forward_value = dp.asset_price - strike * dp.discount_factor();
        assert_approx_eq!(BlackScholesMerton::call(&dp), forward_value, 1e-6);

        // far out of the money the call is worthless
        let dp = DerivativeParameter::new(1.0e-6, strike, tte, rfr, 0.15).unwrap();
        assert_approx_eq!(BlackScholesMerton::call(&dp), 0.0, 1e-10);

        let dp = DerivativeParameter::new(300.0, strike, tte, rfr, 0.15).unwrap();
        assert!(BlackScholesMerton::call(&dp) >= 0.0);
        assert!(BlackScholesMerton::put(&dp) >= 0.0);
    }
}
