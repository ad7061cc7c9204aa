use clap::Parser;
use race_rating::{
    args::Args,
    model::{
        config::EngineConfig,
        season::{Season, SeasonReport}
    }
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::{error::Error, fs::File, io::BufWriter, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct SeasonOutput<'a> {
    seed: u64,
    config: &'a EngineConfig,
    report: &'a SeasonReport
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Season simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.engine_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Using seed {} (pass --seed {} to reproduce)", seed, seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut season = Season::new(config.clone(), args.true_ratings.clone())?.with_progress(!args.no_progress);
    let report = season.run(args.events, &mut rng)?;

    println!("{:>8} {:>10} {:>10} {:>10}", "player", "true", "rating", "error");
    for (i, (truth, rating)) in report.true_ratings.iter().zip(&report.final_ratings).enumerate() {
        println!("{:>8} {:>10.1} {:>10.1} {:>10.1}", i, truth, rating, rating - truth);
    }
    println!(
        "Mean absolute error: {:.1} -> {:.1} over {} events",
        report.initial_error,
        report.final_error,
        report.history.len()
    );

    if let Some(path) = &args.output {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(
            writer,
            &SeasonOutput {
                seed,
                config: &config,
                report: &report
            }
        )?;
        info!("Season report written to {}", path.display());
    }

    Ok(())
}
