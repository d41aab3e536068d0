//! Render module - rotation targets and their CSS serialization
//!
//! Re-exports only. All logic in submodules.

mod target;
mod transform;

pub use target::RotationTarget;
pub use transform::{parse_rotation, rotation_or_zero, to_css};
