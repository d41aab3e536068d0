//! Inertia engine - decaying angular velocity applied every tick
//!
//! `accel` is radians added to the rotation per tick. Each tick it moves
//! one `decay_step` toward zero; if that step carries it across zero it is
//! snapped to exactly 0 so the spin never wobbles back.

use crate::config::SpinnerConfig;
use crate::render::RotationTarget;

/// Owns the rotation, the angular velocity and the target that displays them
pub struct InertiaEngine<T: RotationTarget> {
    target: T,
    /// Current rotation in radians (always finite)
    rotation: f64,
    /// Angular velocity in radians per tick
    accel: f64,
    decay_step: f64,
}

impl<T: RotationTarget> InertiaEngine<T> {
    pub fn new(target: T) -> Self {
        Self::with_rotation(target, 0.0, &SpinnerConfig::default())
    }

    /// Engine starting from an existing rotation
    pub fn with_rotation(target: T, rotation: f64, config: &SpinnerConfig) -> Self {
        Self {
            target,
            rotation: if rotation.is_finite() { rotation } else { 0.0 },
            accel: 0.0,
            decay_step: config.validated().decay_step,
        }
    }

    /// Velocity change the next tick will apply
    pub fn inertia(&self) -> f64 {
        if self.accel > 0.0 {
            -self.decay_step
        } else if self.accel < 0.0 {
            self.decay_step
        } else {
            0.0
        }
    }

    /// One timer cycle: decay, snap on sign change, advance, render
    pub fn tick(&mut self) {
        let prev_accel = self.accel;
        self.add_accel(self.inertia());

        if prev_accel * self.accel < 0.0 {
            self.accel = 0.0;
        }

        // Velocity that would overflow the rotation is dropped
        let rotation = self.rotation + self.accel;
        if rotation.is_finite() {
            self.rotation = rotation;
        } else {
            self.accel = 0.0;
        }
        self.target.render(self.rotation);
    }

    /// Apply a gesture increment now and keep it as velocity
    ///
    /// Ignored when either the rotation or the velocity would stop being finite.
    pub fn set_rotate(&mut self, delta: f64) {
        let rotation = self.rotation + delta;
        let accel = self.accel + delta;
        if !rotation.is_finite() || !accel.is_finite() {
            return;
        }
        self.rotation = rotation;
        self.target.render(self.rotation);
        self.accel = accel;
    }

    /// Ignored when the velocity would stop being finite
    pub fn add_accel(&mut self, delta: f64) {
        let accel = self.accel + delta;
        if accel.is_finite() {
            self.accel = accel;
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn accel(&self) -> f64 {
        self.accel
    }

    /// No velocity left; ticks will not move the target
    pub fn is_idle(&self) -> bool {
        self.accel == 0.0
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DECAY_STEP;

    #[derive(Default)]
    struct Frames(Vec<f64>);

    impl RotationTarget for Frames {
        fn render(&mut self, radians: f64) {
            self.0.push(radians);
        }
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.tick();
        engine.tick();
        assert_eq!(engine.accel(), 0.0);
        assert_eq!(engine.rotation(), 0.0);
        assert!(engine.is_idle());
    }

    #[test]
    fn test_set_rotate_from_nothing() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.set_rotate(0.2);
        assert_eq!(engine.rotation(), 0.2);
        assert_eq!(engine.accel(), 0.2);
        assert_eq!(engine.target().0, vec![0.2]);
    }

    #[test]
    fn test_set_rotate_ignores_non_finite() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.set_rotate(f64::NAN);
        engine.set_rotate(f64::INFINITY);
        assert_eq!(engine.rotation(), 0.0);
        assert_eq!(engine.accel(), 0.0);
        assert!(engine.target().0.is_empty());
    }

    #[test]
    fn test_set_rotate_refuses_overflow() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.set_rotate(1e308);
        engine.set_rotate(1e308);
        assert_eq!(engine.rotation(), 1e308);
        assert_eq!(engine.accel(), 1e308);
        assert_eq!(engine.target().0, vec![1e308]);

        engine.tick();
        assert!(engine.rotation().is_finite());
        assert!(engine.accel().is_finite());
    }

    #[test]
    fn test_tick_drops_velocity_that_would_overflow() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.set_rotate(f64::MAX);
        engine.tick();
        assert_eq!(engine.rotation(), f64::MAX);
        assert_eq!(engine.accel(), 0.0);
        assert_eq!(engine.target().0.last(), Some(&f64::MAX));
    }

    #[test]
    fn test_add_accel_refuses_overflow() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.add_accel(f64::MAX);
        engine.add_accel(f64::MAX);
        engine.add_accel(f64::NAN);
        assert_eq!(engine.accel(), f64::MAX);
    }

    #[test]
    fn test_positive_decay_converges() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.add_accel(0.05);

        let mut ticks = 0;
        while !engine.is_idle() {
            let before = engine.accel();
            engine.tick();
            let after = engine.accel();

            assert!(after >= 0.0, "overshot to {after}");
            if after != 0.0 {
                assert!((before - after - DECAY_STEP).abs() < 1e-12);
            }
            ticks += 1;
            assert!(ticks <= 52, "did not settle");
        }
        assert!(ticks >= 50);
    }

    #[test]
    fn test_negative_decay_converges() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.add_accel(-0.0105);

        for _ in 0..20 {
            engine.tick();
            assert!(engine.accel() <= 0.0);
        }
        assert!(engine.is_idle());
    }

    #[test]
    fn test_sign_flip_snaps_to_zero() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.add_accel(0.0004);
        engine.tick();
        assert_eq!(engine.accel(), 0.0);
        assert_eq!(engine.rotation(), 0.0);
    }

    #[test]
    fn test_tick_advances_rotation_by_decayed_accel() {
        let mut engine = InertiaEngine::new(Frames::default());
        engine.set_rotate(0.01);
        engine.tick();
        assert!((engine.accel() - 0.009).abs() < 1e-15);
        assert!((engine.rotation() - 0.019).abs() < 1e-15);
        assert_eq!(engine.target().0.len(), 2);
    }

    #[test]
    fn test_with_rotation_seeds_state() {
        let config = SpinnerConfig::default();
        let engine = InertiaEngine::with_rotation(Frames::default(), 1.25, &config);
        assert_eq!(engine.rotation(), 1.25);

        let engine = InertiaEngine::with_rotation(Frames::default(), f64::NAN, &config);
        assert_eq!(engine.rotation(), 0.0);
    }

    #[test]
    fn test_custom_decay_step() {
        let config = SpinnerConfig { decay_step: 0.01, ..SpinnerConfig::default() };
        let mut engine = InertiaEngine::with_rotation(Frames::default(), 0.0, &config);
        engine.add_accel(0.05);
        engine.tick();
        assert!((engine.accel() - 0.04).abs() < 1e-15);
    }
}
