//! Signed swept angle between two consecutive pointer samples
//!
//! Both samples are mirrored through the viewport center, then:
//!
//! ```text
//! sign  = +1 if cross(prev', next') > 0 else -1
//! angle = sign * acos(dot(prev', next') / (|prev'| * |next'|)) / divisor
//! ```
//!
//! Any NaN (a sample sitting exactly on the center) collapses to 0.

use crate::config::DAMPING_DIVISOR;

use super::point::Point;
use super::viewport::Viewport;

/// Rotation increment between two samples, using the default damping
pub fn angle_between(prev: Point, next: Point, viewport: &Viewport) -> f64 {
    damped_angle_between(prev, next, viewport, DAMPING_DIVISOR)
}

/// Rotation increment between two samples with an explicit damping divisor
pub fn damped_angle_between(prev: Point, next: Point, viewport: &Viewport, divisor: f64) -> f64 {
    let u = viewport.reflect(prev).to_vector();
    let v = viewport.reflect(next).to_vector();

    // Zero cross product counts as clockwise
    let sign = if u.perp(&v) > 0.0 { 1.0 } else { -1.0 };

    // sqrt(|u|² |v|²) == |u| |v|, and is exactly |u|² when u == v
    let norms = (u.dot(&u) * v.dot(&v)).sqrt();
    let angle = sign * (u.dot(&v) / norms).acos() / divisor;

    if angle.is_nan() { 0.0 } else { angle }
}
