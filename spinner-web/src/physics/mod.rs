//! Physics module - spin-down inertia
//!
//! Re-exports only. All logic in submodules.

mod inertia;

pub use inertia::InertiaEngine;
