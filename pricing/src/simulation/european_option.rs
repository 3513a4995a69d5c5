use crate::common::{call_value, put_value, DerivativeParameter};
use crate::error::PricingError;
use crate::simulation::gbm::GeometricBrownianMotion;
use crate::simulation::monte_carlo::{
    MonteCarloPathSimulator, Path, PathEvaluator, PathSlice, SampleStatistics,
};

/// Monte Carlo pricer for standard European options on a daily trading grid.
///
/// Pricing and rendering are decoupled: [`sample_paths`](Self::sample_paths)
/// hands out the raw paths (e.g. for plotting), while [`call`](Self::call) and
/// [`put`](Self::put) fold every path into its discounted payoff right away.
pub struct MonteCarloEuropeanOption {
    option_params: DerivativeParameter,
    mc_simulator: MonteCarloPathSimulator,
    seed_nr: u64,
}

impl MonteCarloEuropeanOption {
    pub fn new(
        option_params: DerivativeParameter,
        nr_paths: usize,
        seed_nr: u64,
    ) -> Result<Self, PricingError> {
        if nr_paths == 0 {
            return Err(PricingError::EmptySample);
        }
        let nr_steps = option_params.trading_steps()?;
        Ok(Self {
            option_params,
            mc_simulator: MonteCarloPathSimulator::new(nr_paths, nr_steps),
            seed_nr,
        })
    }

    pub fn params(&self) -> &DerivativeParameter {
        &self.option_params
    }

    pub fn nr_paths(&self) -> usize {
        self.mc_simulator.nr_paths
    }

    pub fn nr_steps(&self) -> usize {
        self.mc_simulator.nr_steps
    }

    fn dt(&self) -> f64 {
        self.option_params.time_to_expiration / self.mc_simulator.nr_steps as f64
    }

    fn call_payoff(&self, disc_factor: f64, path: &PathSlice) -> Option<f64> {
        path.last()
            .map(|p| call_value(*p, self.option_params.strike) * disc_factor)
    }

    fn put_payoff(&self, disc_factor: f64, path: &PathSlice) -> Option<f64> {
        path.last()
            .map(|p| put_value(*p, self.option_params.strike) * disc_factor)
    }

    /// The simulated daily price paths, each holding `nr_steps + 1` prices
    /// with the spot at index 0.
    pub fn sample_paths(&self) -> Vec<Path> {
        let stock_gbm: GeometricBrownianMotion = self.into();
        self.mc_simulator.simulate_paths(self.seed_nr, &stock_gbm)
    }

    fn sample_payoffs(
        &self,
        pay_off: impl Fn(&PathSlice) -> Option<f64>,
    ) -> Result<SampleStatistics, PricingError> {
        let stock_gbm: GeometricBrownianMotion = self.into();
        let payoffs = self
            .mc_simulator
            .simulate_paths_with(self.seed_nr, &stock_gbm, pay_off);
        SampleStatistics::from_samples(&payoffs).ok_or(PricingError::EmptySample)
    }

    /// The price (theoretical value) of the standard European call option.
    pub fn call(&self) -> Result<f64, PricingError> {
        self.call_estimate().map(|estimate| estimate.mean)
    }

    /// Call price together with its Monte Carlo standard error.
    pub fn call_estimate(&self) -> Result<SampleStatistics, PricingError> {
        let disc_factor = self.option_params.discount_factor();
        self.sample_payoffs(|path| self.call_payoff(disc_factor, path))
    }

    /// The price (theoretical value) of the standard European put option.
    pub fn put(&self) -> Result<f64, PricingError> {
        let disc_factor = self.option_params.discount_factor();
        self.sample_payoffs(|path| self.put_payoff(disc_factor, path))
            .map(|estimate| estimate.mean)
    }

    /// Call price statistics over previously sampled paths, so one simulation
    /// can feed both the pricer and a renderer.
    pub fn call_statistics(&self, paths: &[Path]) -> Result<SampleStatistics, PricingError> {
        let disc_factor = self.option_params.discount_factor();
        PathEvaluator::new(paths)
            .evaluate_statistics(|path| self.call_payoff(disc_factor, path))
            .ok_or(PricingError::EmptySample)
    }
}

impl From<&MonteCarloEuropeanOption> for GeometricBrownianMotion {
    fn from(mceo: &MonteCarloEuropeanOption) -> Self {
        // under the risk neutral measure we have mu = r
        let drift = mceo.option_params.rfr;
        GeometricBrownianMotion::new(
            mceo.option_params.asset_price,
            drift,
            mceo.option_params.vola,
            mceo.dt(),
        )
    }
}
