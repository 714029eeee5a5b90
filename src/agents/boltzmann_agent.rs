//! Softmax (Boltzmann) agent.

use anyhow::Context;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::action_space::ActionSpace;
use crate::agents::ActionSelector;
use crate::policy::action_distribution;
use crate::state::Point;
use crate::transition::sample_index;

/// An agent that samples actions with probability proportional to
/// `exp(beta * q_value)`. Owns its random generator.
pub struct BoltzmannAgent<R: Rng = ChaCha8Rng> {
    beta: f64,
    rng: R,
}

impl BoltzmannAgent {
    /// Agent with a deterministic generator seeded from `seed`.
    pub fn seeded(beta: f64, seed: u64) -> Self {
        Self {
            beta,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> BoltzmannAgent<R> {
    pub fn with_rng(beta: f64, rng: R) -> Self {
        Self { beta, rng }
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn set_beta(&mut self, beta: f64) {
        self.beta = beta;
    }
}

impl<R: Rng> ActionSelector for BoltzmannAgent<R> {
    fn select_action(
        &mut self,
        state: Point,
        action_space: &ActionSpace,
    ) -> anyhow::Result<(usize, Vec<f64>)> {
        let probs = action_distribution(self.beta, state, action_space)
            .with_context(|| format!("Failed to compute action distribution (beta = {})", self.beta))?;
        let chosen = sample_index(&probs, &mut self.rng)
            .context("Action distribution has no mass")?;
        Ok((chosen, probs))
    }
}
