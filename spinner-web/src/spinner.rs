//! Spinner - gesture tracking wired to the inertia engine
//!
//! Event handlers feed samples in; every increment is applied to the
//! rotation immediately and added to the angular velocity.

use crate::config::SpinnerConfig;
use crate::geometry::{Point, Viewport};
use crate::input::GestureTracker;
use crate::physics::InertiaEngine;
use crate::render::RotationTarget;

pub struct Spinner<T: RotationTarget> {
    tracker: GestureTracker,
    engine: InertiaEngine<T>,
}

impl<T: RotationTarget> Spinner<T> {
    pub fn new(target: T) -> Self {
        Self::with_config(target, 0.0, &SpinnerConfig::default())
    }

    pub fn with_config(target: T, rotation: f64, config: &SpinnerConfig) -> Self {
        let config = config.validated();
        Self {
            tracker: GestureTracker::with_damping(config.damping_divisor),
            engine: InertiaEngine::with_rotation(target, rotation, &config),
        }
    }

    pub fn on_press(&mut self, point: Point) {
        self.tracker.press(point);
    }

    /// Returns the applied increment, if any
    pub fn on_drag(&mut self, point: Point, viewport: &Viewport) -> Option<f64> {
        let increment = self.tracker.drag(point, viewport)?;
        self.engine.set_rotate(increment);
        Some(increment)
    }

    /// Touch ends carry no final point when the contact is already gone
    pub fn on_release(&mut self, point: Option<Point>, viewport: &Viewport) -> Option<f64> {
        let Some(point) = point else {
            self.tracker.cancel();
            return None;
        };
        let increment = self.tracker.release(point, viewport)?;
        self.engine.set_rotate(increment);
        Some(increment)
    }

    pub fn tick(&mut self) {
        self.engine.tick();
    }

    pub fn engine(&self) -> &InertiaEngine<T> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut InertiaEngine<T> {
        &mut self.engine
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }
}
