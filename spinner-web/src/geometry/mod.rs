//! Geometry module - pointer samples to rotation increments
//!
//! Re-exports only. All logic in submodules.

mod point;
mod viewport;
mod angle;

pub use point::{Point, PointerLike};
pub use viewport::Viewport;
pub use angle::{angle_between, damped_angle_between};
