//! Agent implementations for driving the point agent.
//!
//! All agents implement the [`ActionSelector`] trait.

use crate::action_space::ActionSpace;
use crate::state::{apply_action, Point};

pub mod boltzmann_agent;
pub mod random_agent;

pub use boltzmann_agent::BoltzmannAgent;
pub use random_agent::RandomAgent;

/// Trait for agents that select an action from a state.
pub trait ActionSelector {
    /// Select an action for `state`.
    ///
    /// Returns `(action_index, policy_probabilities)` where `action_index`
    /// indexes into `action_space` and `policy_probabilities` is the
    /// distribution the index was drawn from, aligned with `action_space`.
    fn select_action(
        &mut self,
        state: Point,
        action_space: &ActionSpace,
    ) -> anyhow::Result<(usize, Vec<f64>)>;
}

/// Let `agent` pick an action and apply it.
pub fn step<A: ActionSelector + ?Sized>(
    agent: &mut A,
    state: Point,
    action_space: &ActionSpace,
) -> anyhow::Result<Point> {
    let (index, _) = agent.select_action(state, action_space)?;
    let action = action_space
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("Agent picked out-of-range action index {}", index))?;
    Ok(apply_action(state, action))
}
