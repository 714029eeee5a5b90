//! Random agent: picks any action uniformly at random.

use rand::Rng;

use crate::action_space::ActionSpace;
use crate::agents::ActionSelector;
use crate::state::Point;

/// An agent that ignores the state and selects a uniformly random action.
/// Equivalent to a Boltzmann agent with `beta = 0`.
pub struct RandomAgent<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ActionSelector for RandomAgent<R> {
    fn select_action(
        &mut self,
        _state: Point,
        action_space: &ActionSpace,
    ) -> anyhow::Result<(usize, Vec<f64>)> {
        anyhow::ensure!(!action_space.is_empty(), "No actions available");

        let n = action_space.len();
        let chosen = self.rng.gen_range(0..n);
        let policy = vec![1.0 / n as f64; n];

        Ok((chosen, policy))
    }
}
