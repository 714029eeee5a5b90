//! Measure the average wall-clock cost of one Boltzmann transition.
//!
//! Draws a random state and inverse temperature per trial, times a single
//! `transition` call, and prints the mean over all trials. Optionally checks
//! the sampler's empirical action frequencies against the policy.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use boltzmann_nav::policy::action_distribution;
use boltzmann_nav::speed_test::{empirical_frequencies, run_speed_test};
use boltzmann_nav::speed_test_config::{load_config, SpeedTestConfig};
use boltzmann_nav::{build_action_space, Point};

/// Trials used by `--check-beta`.
const CHECK_TRIALS: usize = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "speed_test",
    about = "Time one softmax action-selection-and-move step",
    version
)]
struct Args {
    /// YAML file with a `speed_test` section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of timed trials (overrides the config file)
    #[arg(short, long)]
    n_samples: Option<usize>,

    /// Seed for the trial generator (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of threads for the frequency check (overrides the config file)
    #[arg(long)]
    num_threads: Option<usize>,

    /// Also compare sampled action frequencies at (0.5, 0.5) with the policy
    /// for this beta
    #[arg(long)]
    check_beta: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boltzmann_nav=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?.speed_test,
        None => SpeedTestConfig::default(),
    };
    if let Some(n) = args.n_samples {
        config.n_samples = n;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(n) = args.num_threads {
        config.num_threads = n;
    }
    config.validate()?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
        .context("Failed to configure rayon thread pool")?;

    let aspace = build_action_space();
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!("Run experiments with {} samples:", config.n_samples);
    let report = run_speed_test(&config, &aspace, &mut rng)?;
    if report.n_failed > 0 {
        println!("  {} trials failed and were skipped", report.n_failed);
    }
    println!("{}", report);

    if let Some(beta) = args.check_beta {
        let state = Point::new(0.5, 0.5);
        let expected = action_distribution(beta, state, &aspace)
            .with_context(|| format!("Failed to compute policy for beta = {}", beta))?;
        let seed = config.seed.unwrap_or(0);
        let counts = empirical_frequencies(state, &aspace, beta, CHECK_TRIALS, seed)
            .context("Frequency check failed")?;

        println!(
            "\nAction frequencies at ({}, {}) with beta = {} over {} trials:",
            state.x, state.y, beta, CHECK_TRIALS
        );
        println!("  idx  distance    angle   expected   observed");
        for (i, action) in aspace.iter().enumerate() {
            println!(
                "  {:>3}  {:>8.2} {:>8.4}   {:>8.5}   {:>8.5}",
                i,
                action.distance,
                action.angle,
                expected[i],
                counts[i] as f64 / CHECK_TRIALS as f64
            );
        }
    }

    Ok(())
}
