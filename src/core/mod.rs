//! Core functionality shared by every layer
//!
//! - utils/  - console logging macros (must be first for macro export!)
//! - error   - crate error type

#[macro_use]
pub mod utils;
pub mod error;
