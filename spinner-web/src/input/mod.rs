//! Input module - gesture sampling and platform selection
//!
//! Re-exports only. All logic in submodules.

mod error;
mod gesture;
mod platform;

pub use error::InputError;
pub use gesture::{GestureTracker, MAX_SAMPLES};
pub use platform::{InputMode, RawSample, MOBILE_PLATFORMS};
