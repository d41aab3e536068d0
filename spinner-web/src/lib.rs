//! Spinner Web - drag-to-spin image widget with inertia
//!
//! Pure logic lives in `geometry`, `physics`, `input` and `render` and runs
//! on any target. `bridge` holds every wasm_bindgen entry point and all
//! DOM access.
//!
//! ```js
//! import init, { mount } from "./pkg/spinner_web.js";
//! await init();
//! const spinner = mount("img");
//! spinner.start();
//! ```

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod config;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod render;
pub mod spinner;
mod bridge;

pub use bridge::{mount, mount_with_config, BridgeError, SpinnerHandle};
pub use config::SpinnerConfig;
pub use geometry::{angle_between, Point, PointerLike, Viewport};
pub use input::{GestureTracker, InputError, InputMode};
pub use physics::InertiaEngine;
pub use render::RotationTarget;
pub use spinner::Spinner;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
