use crate::action_space::{Action, ActionSpace};
use crate::distance::euclidean;
use crate::state::{apply_action, Point};

/// Desirability of taking `action` from `state`: the negated step length
/// minus the Euclidean distance from the resulting position to the origin.
///
/// Always `<= -|state|` by the triangle inequality; equality holds for the
/// no-op and for steps aimed straight at the origin that do not overshoot.
pub fn q_value(state: Point, action: &Action) -> f64 {
    -action.distance - euclidean(apply_action(state, action), Point::ORIGIN)
}

/// Q-values for every action, aligned with `action_space`.
pub fn q_values(state: Point, action_space: &ActionSpace) -> Vec<f64> {
    action_space.iter().map(|a| q_value(state, a)).collect()
}
