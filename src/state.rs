use crate::action_space::Action;

/// Agent position in the plane. Recreated on every step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Move `state` by `action.distance` along `action.angle`.
pub fn apply_action(state: Point, action: &Action) -> Point {
    Point {
        x: state.x + action.angle.cos() * action.distance,
        y: state.y + action.angle.sin() * action.distance,
    }
}
