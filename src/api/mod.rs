//! Public API
//!
//! - `wasm` - the JS-driven `BlobField` facade
//! - `dom`  - the self-driving page binding (wasm32 only)

pub mod wasm {
    pub use crate::simulation::{BlobField, PerfStats};
}

#[cfg(target_arch = "wasm32")]
pub mod dom;
