use clap::Parser;
use std::path::PathBuf;

use crate::model::{
    config::EngineConfig,
    constants::{DEFAULT_EVENTS, DEFAULT_SAMPLES, K_FACTOR, RATING_BASE, RATING_VAR},
    error::Result
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Race Rating",
    long_about = "Simulates a season of races and checks that ratings converge to known true ratings"
)]
pub struct Args {
    /// True ratings of the simulated players, comma separated. At most one per
    /// slot in the points table; empty slots are filled with baseline players.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = [1500.0, 1250.0, 1100.0, 800.0],
        allow_negative_numbers = true
    )]
    pub true_ratings: Vec<f64>,

    /// Number of events (grand prix) to simulate
    #[arg(short, long, default_value_t = DEFAULT_EVENTS)]
    pub events: usize,

    /// Seed for the random source. A random seed is picked and logged if unset.
    #[arg(long, env = "RATING_SEED")]
    pub seed: Option<u64>,

    /// Simulated races per expectation estimate
    #[arg(long, env = "RATING_SAMPLES", default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Scale applied to the difference between observed and expected point share
    #[arg(short, long, env = "RATING_K_FACTOR", default_value_t = K_FACTOR)]
    pub k_factor: f64,

    /// Standard deviation of race performance around a player's rating
    #[arg(long, env = "RATING_VAR", default_value_t = RATING_VAR)]
    pub rating_var: f64,

    /// Starting rating, also used for padding players
    #[arg(long, env = "RATING_BASE", default_value_t = RATING_BASE, allow_negative_numbers = true)]
    pub rating_base: f64,

    /// Writes the season report (rating history per event) as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hides the progress bar
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_progress: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    /// Engine configuration from the command line, validated
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig {
            rating_base: self.rating_base,
            rating_var: self.rating_var,
            k_factor: self.k_factor,
            samples: self.samples,
            ..EngineConfig::default()
        };

        config.validate()?;
        Ok(config)
    }
}
