//! Configuration for speed-test runs.
//!
//! Parsed from YAML. Only the `speed_test` section is read; other sections
//! are silently ignored so a larger experiment file can be reused.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Number of timed trials when nothing else is configured.
pub const DEFAULT_N_SAMPLES: usize = 10_000;

/// Top-level config file.
#[derive(Debug, Default, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub speed_test: SpeedTestConfig,
}

/// Speed-test parameters.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SpeedTestConfig {
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,

    /// Seed for the trial generator. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Rayon pool size for empirical frequency checks.
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

fn default_n_samples() -> usize {
    DEFAULT_N_SAMPLES
}

fn default_num_threads() -> usize {
    1
}

impl Default for SpeedTestConfig {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_N_SAMPLES,
            seed: None,
            num_threads: default_num_threads(),
        }
    }
}

impl SpeedTestConfig {
    /// Reject settings that cannot produce a run.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.n_samples > 0, "n_samples must be positive");
        anyhow::ensure!(self.num_threads > 0, "num_threads must be positive");
        Ok(())
    }
}

/// Load an `ExperimentConfig` from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let config: ExperimentConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    config.speed_test.validate()?;
    tracing::debug!(?config, "loaded config");
    Ok(config)
}
