//! Tunable constants for the spinner
//!
//! The numeric defaults are the values the widget has always shipped with.
//! They have no derivation beyond "feels right", so treat them as knobs.

use wasm_bindgen::prelude::*;

/// Divisor applied to the swept pointer angle before it becomes a rotation increment
pub const DAMPING_DIVISOR: f64 = 10.0;

/// Magnitude removed from the angular velocity on every tick (0.1³)
pub const DECAY_STEP: f64 = 0.001;

/// Inertia timer period in milliseconds
pub const TICK_INTERVAL_MS: u32 = 3;

/// Spinner configuration, constructible from JavaScript
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinnerConfig {
    /// Swept angle is divided by this before being applied
    pub damping_divisor: f64,
    /// Per-tick decay magnitude of the angular velocity
    pub decay_step: f64,
    /// Timer period in milliseconds
    pub tick_interval_ms: u32,
}

#[wasm_bindgen]
impl SpinnerConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            damping_divisor: DAMPING_DIVISOR,
            decay_step: DECAY_STEP,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }

    /// Copy with every out-of-range field replaced by its default
    ///
    /// A zero or non-finite divisor would turn every increment into NaN or
    /// infinity, and a negative decay step would accelerate instead of damp.
    pub fn validated(&self) -> SpinnerConfig {
        let defaults = Self::new();
        let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };

        SpinnerConfig {
            damping_divisor: positive(self.damping_divisor, defaults.damping_divisor),
            decay_step: positive(self.decay_step, defaults.decay_step),
            tick_interval_ms: if self.tick_interval_ms == 0 {
                defaults.tick_interval_ms
            } else {
                self.tick_interval_ms
            },
        }
    }
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self::new()
    }
}
