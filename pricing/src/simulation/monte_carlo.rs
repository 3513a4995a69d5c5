use rand::SeedableRng;
use rand_distr::Distribution;
use rand_hc::Hc128Rng;

pub type Path = Vec<f64>;
pub type PathSlice = [f64];

/// Samples whole paths from an explicit, seedable generator, so that
/// simulations are reproducible by seed.
pub trait PathSampler {
    type Dist: Distribution<f64>;

    fn base_distribution(&self) -> Self::Dist;

    fn sample_path(&self, rn_generator: &mut Hc128Rng, nr_steps: usize) -> Path;
}

pub struct MonteCarloPathSimulator {
    pub nr_paths: usize,
    pub nr_steps: usize,
}

impl MonteCarloPathSimulator {
    pub fn new(nr_paths: usize, nr_steps: usize) -> Self {
        Self { nr_paths, nr_steps }
    }

    pub fn rn_generator(seed_nr: u64) -> Hc128Rng {
        Hc128Rng::seed_from_u64(seed_nr)
    }

    /// Paths are drawn consecutively from one generator stream, hence
    /// statistically independent of each other.
    pub fn simulate_paths(&self, seed_nr: u64, sampler: &impl PathSampler) -> Vec<Path> {
        let mut paths = Vec::with_capacity(self.nr_paths);
        let mut rn_generator = Self::rn_generator(seed_nr);

        for _ in 0..self.nr_paths {
            let path = sampler.sample_path(&mut rn_generator, self.nr_steps);
            paths.push(path);
        }
        paths
    }

    /// Same sampling as [`simulate_paths`](Self::simulate_paths) but folds each
    /// path into a single value right away instead of retaining it.
    pub fn simulate_paths_with(
        &self,
        seed_nr: u64,
        sampler: &impl PathSampler,
        path_fn: impl Fn(&PathSlice) -> Option<f64>,
    ) -> Vec<Option<f64>> {
        let mut path_values = Vec::with_capacity(self.nr_paths);
        let mut rn_generator = Self::rn_generator(seed_nr);

        for _ in 0..self.nr_paths {
            let path = sampler.sample_path(&mut rn_generator, self.nr_steps);
            path_values.push(path_fn(&path));
        }
        path_values
    }
}

/// Mean, spread and standard error of a Monte Carlo sample.
/// The standard error shrinks with O(1 / sqrt(nr of samples)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub std_error: f64,
}

impl SampleStatistics {
    pub fn from_samples(samples: &[Option<f64>]) -> Option<Self> {
        let values: Vec<f64> = samples.iter().flatten().copied().collect();
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = if values.len() < 2 {
            0.0
        } else {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };
        let std_dev = variance.sqrt();
        Some(Self {
            mean,
            std_dev,
            std_error: std_dev / n.sqrt(),
        })
    }
}

pub struct PathEvaluator<'a> {
    paths: &'a [Path],
}

impl<'a> PathEvaluator<'a> {
    pub fn new(paths: &'a [Path]) -> Self {
        Self { paths }
    }

    pub fn evaluate(&self, path_fn: impl Fn(&'a Path) -> Option<f64>) -> Vec<Option<f64>> {
        self.paths.iter().map(path_fn).collect()
    }

    pub fn evaluate_average(&self, path_fn: impl Fn(&'a Path) -> Option<f64>) -> Option<f64> {
        self.evaluate_statistics(path_fn).map(|stats| stats.mean)
    }

    pub fn evaluate_statistics(
        &self,
        path_fn: impl Fn(&'a Path) -> Option<f64>,
    ) -> Option<SampleStatistics> {
        SampleStatistics::from_samples(&self.evaluate(path_fn))
    }
}
