//! One selection-and-move step of the Boltzmann policy.
//!
//! The random generator is passed in by the caller. Seed it (e.g. a
//! `ChaCha8Rng`) for reproducible runs, or hand each thread its own.

use rand::Rng;

use crate::action_space::ActionSpace;
use crate::error::Result;
use crate::policy::action_distribution;
use crate::state::{apply_action, Point};

/// Inverse-CDF categorical sample for a uniform draw `u` in `[0, 1)`.
///
/// Returns the first index whose cumulative probability exceeds `u`. If
/// rounding leaves the total just below `u`, the last index with non-zero
/// probability is returned. `None` only for an empty or all-zero vector.
pub fn inverse_cdf(probs: &[f64], u: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_nonzero = None;
    for (i, &p) in probs.iter().enumerate() {
        if p <= 0.0 {
            continue;
        }
        cumulative += p;
        last_nonzero = Some(i);
        if cumulative > u {
            return Some(i);
        }
    }
    last_nonzero
}

/// Draw one index from the categorical distribution `probs` using a single
/// uniform draw from `rng`.
pub fn sample_index<R: Rng + ?Sized>(probs: &[f64], rng: &mut R) -> Option<usize> {
    let u: f64 = rng.gen();
    inverse_cdf(probs, u)
}

/// Sample an action index under the policy and the state it leads to.
pub fn sample_action<R: Rng + ?Sized>(
    state: Point,
    action_space: &ActionSpace,
    beta: f64,
    rng: &mut R,
) -> Result<(usize, Point)> {
    let probs = action_distribution(beta, state, action_space)?;
    // A successful distribution always has positive mass.
    let index = sample_index(&probs, rng).unwrap_or(0);
    let next = apply_action(state, &action_space[index]);
    tracing::trace!(index, x = next.x, y = next.y, beta, "transition");
    Ok((index, next))
}

/// Draw one action under the Boltzmann policy and return the new state.
pub fn transition<R: Rng + ?Sized>(
    state: Point,
    action_space: &ActionSpace,
    beta: f64,
    rng: &mut R,
) -> Result<Point> {
    sample_action(state, action_space, beta, rng).map(|(_, next)| next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_space::{build_action_space, DIST_ACTIONS};
    use crate::distance::euclidean;
    use crate::error::PolicyError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_inverse_cdf_boundaries() {
        let probs = [0.25, 0.25, 0.5];
        assert_eq!(inverse_cdf(&probs, 0.0), Some(0));
        assert_eq!(inverse_cdf(&probs, 0.2499), Some(0));
        assert_eq!(inverse_cdf(&probs, 0.25), Some(1));
        assert_eq!(inverse_cdf(&probs, 0.5), Some(2));
        assert_eq!(inverse_cdf(&probs, 0.9999), Some(2));
    }

    #[test]
    fn test_inverse_cdf_skips_zero_mass() {
        let probs = [0.0, 0.5, 0.0, 0.5, 0.0];
        assert_eq!(inverse_cdf(&probs, 0.0), Some(1));
        assert_eq!(inverse_cdf(&probs, 0.75), Some(3));
        // Rounding shortfall lands on the last index with mass, not a zero.
        assert_eq!(inverse_cdf(&probs, 1.0), Some(3));
    }

    #[test]
    fn test_inverse_cdf_empty() {
        assert_eq!(inverse_cdf(&[], 0.5), None);
        assert_eq!(inverse_cdf(&[0.0, 0.0], 0.5), None);
    }

    #[test]
    fn test_transition_moves_at_most_longest_step() {
        let space = build_action_space();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = Point::new(0.5, 0.5);
        let max_step = DIST_ACTIONS.iter().cloned().fold(0.0, f64::max);
        for _ in 0..1000 {
            let next = transition(start, &space, 1.0, &mut rng).unwrap();
            assert!(euclidean(start, next) <= max_step + 1e-12);
        }
    }

    #[test]
    fn test_sample_action_matches_applied_action() {
        let space = build_action_space();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let start = Point::new(-0.3, 0.8);
        for _ in 0..200 {
            let (index, next) = sample_action(start, &space, 2.0, &mut rng).unwrap();
            assert!(index < space.len());
            assert_eq!(next, apply_action(start, &space[index]));
        }
    }

    #[test]
    fn test_seeded_transitions_are_reproducible() {
        let space = build_action_space();
        let mut a = ChaCha8Rng::seed_from_u64(1234);
        let mut b = ChaCha8Rng::seed_from_u64(1234);
        let mut sa = Point::new(0.9, 0.1);
        let mut sb = sa;
        for _ in 0..50 {
            sa = transition(sa, &space, 0.5, &mut a).unwrap();
            sb = transition(sb, &space, 0.5, &mut b).unwrap();
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn test_large_beta_always_picks_noop() {
        let space = build_action_space();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let start = Point::new(1.0, 0.5);
        for _ in 0..100 {
            let (index, next) = sample_action(start, &space, 1e6, &mut rng).unwrap();
            assert_eq!(index, 0);
            assert_eq!(next, start);
        }
    }

    #[test]
    fn test_transition_propagates_degeneracy() {
        let space = build_action_space();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = transition(Point::new(0.5, 0.5), &space, f64::NAN, &mut rng).unwrap_err();
        assert!(matches!(err, PolicyError::NumericDegeneracy { .. }));
    }

    #[test]
    fn test_sample_index_uses_one_draw() {
        let probs = [0.1, 0.2, 0.3, 0.4];
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..100 {
            let idx = sample_index(&probs, &mut a).unwrap();
            let u: f64 = b.gen();
            assert_eq!(Some(idx), inverse_cdf(&probs, u));
        }
    }
}
