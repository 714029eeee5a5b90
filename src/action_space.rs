//! The fixed, ordered set of moves available to the agent.
//!
//! Index 0 is always the no-op. The remaining entries are the Cartesian
//! product of [`DIST_ACTIONS`] and the evenly spaced direction angles, in
//! row-major order (distance-major, angle-minor). Policy vectors are aligned
//! index-for-index with this ordering.

use std::f64::consts::PI;
use std::ops::Index;

use ndarray::Array2;

/// Non-zero step lengths.
pub const DIST_ACTIONS: [f64; 2] = [0.3, 0.6];

/// Number of evenly spaced directions per step length.
pub const NUM_DIRECTIONS: usize = 8;

/// First direction angle (inclusive).
pub const ANGLE_START: f64 = -PI;

/// Last direction angle (inclusive).
pub const ANGLE_STOP: f64 = 3.0 * PI / 4.0;

/// Total number of actions: the no-op plus every (distance, angle) pair.
pub const ACTION_SPACE_SIZE: usize = 1 + DIST_ACTIONS.len() * NUM_DIRECTIONS;

/// One possible move: travel `distance` along `angle` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    pub distance: f64,
    pub angle: f64,
}

impl Action {
    pub const NOOP: Action = Action {
        distance: 0.0,
        angle: 0.0,
    };

    pub fn new(distance: f64, angle: f64) -> Self {
        Self { distance, angle }
    }

    pub fn is_noop(&self) -> bool {
        self.distance == 0.0 && self.angle == 0.0
    }
}

/// Immutable, ordered action space. Build it once with [`build_action_space`]
/// and share it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpace {
    actions: Vec<Action>,
}

impl ActionSpace {
    /// Wrap an externally supplied action list, e.g. one handed over from
    /// Python. [`build_action_space`] is the canonical constructor.
    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    /// Export as an `(N, 2)` array with columns `[distance, angle]`.
    pub fn to_array(&self) -> Array2<f64> {
        let mut array = Array2::<f64>::zeros((self.actions.len(), 2));
        for (i, action) in self.actions.iter().enumerate() {
            array[[i, 0]] = action.distance;
            array[[i, 1]] = action.angle;
        }
        array
    }
}

impl Index<usize> for ActionSpace {
    type Output = Action;

    fn index(&self, index: usize) -> &Action {
        &self.actions[index]
    }
}

impl<'a> IntoIterator for &'a ActionSpace {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Evenly spaced angles from [`ANGLE_START`] to [`ANGLE_STOP`], both ends
/// included. The final angle is pinned to the stop value so rounding in the
/// step does not drift it.
pub fn direction_angles() -> [f64; NUM_DIRECTIONS] {
    let step = (ANGLE_STOP - ANGLE_START) / (NUM_DIRECTIONS - 1) as f64;
    let mut angles = [0.0; NUM_DIRECTIONS];
    for (i, angle) in angles.iter_mut().enumerate() {
        *angle = ANGLE_START + i as f64 * step;
    }
    angles[NUM_DIRECTIONS - 1] = ANGLE_STOP;
    angles
}

/// Build the action space: the no-op followed by `DIST_ACTIONS x angles`.
pub fn build_action_space() -> ActionSpace {
    let angles = direction_angles();
    let mut actions = Vec::with_capacity(ACTION_SPACE_SIZE);
    actions.push(Action::NOOP);
    for &distance in DIST_ACTIONS.iter() {
        for &angle in angles.iter() {
            actions.push(Action::new(distance, angle));
        }
    }
    ActionSpace { actions }
}
