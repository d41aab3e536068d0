//! Gesture queue
//!
//! Holds the most recent pointer samples of the current press. Only the
//! last two are ever needed to compute an increment.

use std::collections::VecDeque;

use crate::config::DAMPING_DIVISOR;
use crate::geometry::{damped_angle_between, Point, Viewport};

/// Samples kept after every drag
pub const MAX_SAMPLES: usize = 2;

/// Turns press / drag / release samples into rotation increments
pub struct GestureTracker {
    samples: VecDeque<Point>,
    damping_divisor: f64,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::with_damping(DAMPING_DIVISOR)
    }

    pub fn with_damping(damping_divisor: f64) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES + 1),
            damping_divisor,
        }
    }

    /// Start a gesture; anything left over from the previous one is dropped
    pub fn press(&mut self, point: Point) {
        self.samples.clear();
        self.samples.push_back(point);
    }

    /// Add a sample, returns the increment from the previous one
    ///
    /// `None` when there is no previous sample (drag without a press).
    pub fn drag(&mut self, point: Point, viewport: &Viewport) -> Option<f64> {
        self.samples.push_back(point);
        while self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.last_increment(viewport)
    }

    /// Final sample of the gesture; the queue is empty afterwards
    pub fn release(&mut self, point: Point, viewport: &Viewport) -> Option<f64> {
        let increment = self.drag(point, viewport);
        self.samples.clear();
        increment
    }

    /// End the gesture without a final sample
    pub fn cancel(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn last_increment(&self, viewport: &Viewport) -> Option<f64> {
        match (self.samples.front(), self.samples.back()) {
            (Some(&prev), Some(&next)) if self.samples.len() == MAX_SAMPLES => {
                Some(damped_angle_between(prev, next, viewport, self.damping_divisor))
            }
            _ => None,
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angle_between;

    fn viewport() -> Viewport {
        Viewport::new(200.0, 200.0)
    }

    #[test]
    fn test_press_resets_queue() {
        let mut tracker = GestureTracker::new();
        tracker.press(Point::new(1.0, 1.0));
        tracker.drag(Point::new(2.0, 2.0), &viewport());
        tracker.press(Point::new(3.0, 3.0));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_drag_without_press() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.drag(Point::new(150.0, 100.0), &viewport()), None);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_drag_uses_last_two_samples() {
        let vp = viewport();
        let mut tracker = GestureTracker::new();
        tracker.press(Point::new(10.0, 10.0));
        tracker.drag(Point::new(150.0, 100.0), &vp);
        let increment = tracker.drag(Point::new(150.0, 110.0), &vp);

        let expected = angle_between(Point::new(150.0, 100.0), Point::new(150.0, 110.0), &vp);
        assert_eq!(increment, Some(expected));
        assert_eq!(tracker.len(), MAX_SAMPLES);
    }

    #[test]
    fn test_release_empties_queue() {
        let vp = viewport();
        let mut tracker = GestureTracker::new();
        tracker.press(Point::new(150.0, 100.0));
        let increment = tracker.release(Point::new(100.0, 150.0), &vp);
        assert!(increment.is_some());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut tracker = GestureTracker::new();
        tracker.press(Point::new(150.0, 100.0));
        tracker.cancel();
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_custom_damping() {
        let vp = viewport();
        let mut tracker = GestureTracker::with_damping(1.0);
        tracker.press(Point::new(150.0, 100.0));
        let increment = tracker.drag(Point::new(100.0, 150.0), &vp).unwrap();
        assert!((increment - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
