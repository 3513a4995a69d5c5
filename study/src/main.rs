//! Prices a European call two ways, analytic Black-Scholes and Monte Carlo
//! path simulation, then sweeps the path count to trace how the Monte Carlo
//! estimate converges towards the closed form.

mod config;
mod report;

use std::error::Error;
use std::fs;

use pricing::analytic::{BlackScholesMerton, OptionPrice};
use pricing::simulation::MonteCarloEuropeanOption;

use crate::config::StudyConfig;

pub(crate) type AppResult<T> = Result<T, Box<dyn Error>>;

fn main() -> AppResult<()> {
    let config = StudyConfig::default();
    let contract = config.contract()?;

    let bs_price = BlackScholesMerton::call(&contract);
    println!("Price Returned from Black-Scholes");
    println!("{bs_price:.6}");

    // one simulation feeds both the price comparison and the path plots
    let mc_option =
        MonteCarloEuropeanOption::new(contract.clone(), config.comparison_paths, config.seed_nr)?;
    let paths = mc_option.sample_paths();
    let estimate = mc_option.call_statistics(&paths)?;
    println!(
        "Price Returned from Computational Simulation ({} paths)",
        config.comparison_paths
    );
    println!(
        "{:.6} (standard error {:.4})",
        estimate.mean, estimate.std_error
    );

    let mut price_diffs = Vec::with_capacity(config.sweep_path_counts.len());
    for (k, &nr_paths) in config.sweep_path_counts.iter().enumerate() {
        let sweep_option = MonteCarloEuropeanOption::new(
            contract.clone(),
            nr_paths,
            config.seed_nr + 1 + k as u64,
        )?;
        price_diffs.push(sweep_option.call()? - bs_price);
    }

    let html = report::render_html(&paths, &config.sweep_path_counts, &price_diffs)?;
    fs::write(&config.report_path, html)?;
    println!(
        "wrote {} ({} paths, {} sweep entries)",
        config.report_path.display(),
        paths.len(),
        price_diffs.len()
    );

    Ok(())
}
