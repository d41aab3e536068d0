//! Screen-space points

use nalgebra::Vector2;

use super::viewport::Viewport;

/// Anything that carries client (viewport-relative) coordinates
///
/// Mouse events and individual touch contacts both qualify, so sample
/// extraction does not need one converter per event type.
pub trait PointerLike {
    fn client_x(&self) -> f64;
    fn client_y(&self) -> f64;
}

/// Immutable 2-D screen coordinate
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Read client coordinates off a pointer-like sample
    pub fn from_pointer<P: PointerLike + ?Sized>(source: &P) -> Self {
        Self::new(source.client_x(), source.client_y())
    }

    /// Euclidean distance between two points
    pub fn distance(a: Point, b: Point) -> f64 {
        (a.to_vector() - b.to_vector()).norm()
    }

    /// Distance from the viewport center
    pub fn norm(self, viewport: &Viewport) -> f64 {
        Self::distance(self, viewport.center())
    }

    pub(crate) fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl PointerLike for Point {
    fn client_x(&self) -> f64 {
        self.x
    }

    fn client_y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample(i32, i32);

    impl PointerLike for Sample {
        fn client_x(&self) -> f64 {
            self.0 as f64
        }
        fn client_y(&self) -> f64 {
            self.1 as f64
        }
    }

    #[test]
    fn test_from_pointer() {
        assert_eq!(Point::from_pointer(&Sample(12, -4)), Point::new(12.0, -4.0));
    }

    #[test]
    fn test_distance_symmetric() {
        let pairs = [
            (Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            (Point::new(-12.5, 7.0), Point::new(40.0, -3.25)),
            (Point::new(1e6, 1e-3), Point::new(-1e6, 2.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(Point::distance(a, b), Point::distance(b, a));
        }
        assert!((Point::distance(pairs[0].0, pairs[0].1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm_is_distance_from_center() {
        let viewport = Viewport::new(200.0, 200.0);
        assert_eq!(Point::new(100.0, 100.0).norm(&viewport), 0.0);
        assert!((Point::new(130.0, 140.0).norm(&viewport) - 50.0).abs() < 1e-12);
    }
}
