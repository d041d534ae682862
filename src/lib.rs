//! Blob Engine - soft animated blobs for a web page, in WASM
//!
//! A handful of circular bodies drift across the viewport, push each other
//! apart, squish on contact and react to shakes, device motion, resizes and
//! theme changes.
//!
//! Architecture:
//! - core/          - Logging macros, error type
//! - domain/        - Palettes, physics parameters, configuration
//! - systems/       - Bodies and the body simulation
//! - simulation/    - Event host + JS facade
//! - api/           - Public API (JS facade, page binding)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub use systems::body;
pub use systems::body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("blob engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{BlobField, PerfStats};
#[cfg(target_arch = "wasm32")]
pub use api::dom::BlobAnimator;
pub use crate::core::error::{BlobError, Result};
pub use simulation::InteractionHost;

// Theme catalogue for JS
#[wasm_bindgen]
pub fn theme_count() -> usize {
    domain::THEMES.len()
}

#[wasm_bindgen]
pub fn theme_name(index: usize) -> Option<String> {
    domain::THEMES.get(index).map(|p| p.name.to_string())
}
