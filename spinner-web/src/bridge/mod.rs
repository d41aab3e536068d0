//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points and DOM access live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod events;
mod handle;
mod target;

pub use error::BridgeError;
pub use handle::{mount, mount_with_config, SpinnerHandle};
