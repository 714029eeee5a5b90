//! Boltzmann (softmax) policy over the action space.

use crate::action_space::ActionSpace;
use crate::error::{PolicyError, Result};
use crate::q_value::q_values;
use crate::state::Point;

/// Normalized softmax of `logits`.
///
/// The maximum logit is subtracted before exponentiating so large
/// magnitudes neither overflow nor underflow to an all-zero vector.
/// Returns [`PolicyError::NumericDegeneracy`] when the normalizer is zero,
/// infinite or NaN (e.g. NaN or all `-inf` logits).
pub fn softmax(logits: &[f64]) -> Result<Vec<f64>> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exp_values: Vec<f64> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exp_values.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return Err(PolicyError::NumericDegeneracy { sum });
    }
    Ok(exp_values.iter().map(|&x| x / sum).collect())
}

/// Probability of each action in `action_space` under inverse temperature
/// `beta`: `p_i ∝ exp(beta * q_value(state, a_i))`.
///
/// `beta = 0` yields the exact uniform distribution without looking at the
/// Q-values.
pub fn action_distribution(beta: f64, state: Point, action_space: &ActionSpace) -> Result<Vec<f64>> {
    let n = action_space.len();
    if beta == 0.0 && n > 0 {
        return Ok(vec![1.0 / n as f64; n]);
    }

    let logits: Vec<f64> = q_values(state, action_space)
        .into_iter()
        .map(|q| beta * q)
        .collect();
    softmax(&logits)
}

/// Index of the highest-probability entry, first one on ties.
pub fn argmax(probs: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in probs.iter().enumerate() {
        match best {
            Some((_, best_p)) if p <= best_p => {}
            _ => best = Some((i, p)),
        }
    }
    best.map(|(i, _)| i)
}
