//! Viewport snapshot
//!
//! The page can resize at any time, so callers build a fresh `Viewport`
//! for every sample instead of caching one.

use super::point::Point;

/// Visible area dimensions in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half-dimensions, i.e. the point the image spins around
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Mirror a point through the center
    ///
    /// Screen y grows downward; mirroring makes the cross product sign
    /// agree with the visual direction of the drag.
    pub fn reflect(&self, p: Point) -> Point {
        let center = self.center();
        Point::new(self.width - p.x - center.x, self.height - p.y - center.y)
    }
}
