//! Minkowski distance between two points.

use crate::error::{PolicyError, Result};
use crate::state::Point;

/// Order-`p` Minkowski norm of `p2 - p1`.
///
/// `p = 2` is the Euclidean distance and `p = f64::INFINITY` the Chebyshev
/// (max-coordinate) distance. Any `p` that is not strictly positive, or NaN,
/// is rejected with [`PolicyError::InvalidParameter`].
pub fn distance(p1: Point, p2: Point, order: f64) -> Result<f64> {
    if order.is_nan() || order <= 0.0 {
        return Err(PolicyError::InvalidParameter {
            name: "order",
            value: order,
        });
    }

    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();

    let d = if order == 2.0 {
        dx.hypot(dy)
    } else if order == 1.0 {
        dx + dy
    } else if order.is_infinite() {
        dx.max(dy)
    } else {
        (dx.powf(order) + dy.powf(order)).powf(order.recip())
    };
    Ok(d)
}

/// Euclidean distance. Infallible shorthand for `distance(p1, p2, 2.0)`.
pub fn euclidean(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).abs().hypot((p2.y - p1.y).abs())
}
