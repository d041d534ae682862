//! Body - a single circular blob
//!
//! Plain kinematic data plus the transient visual state (squish, pulse,
//! color) the renderer reads back. No rendering handles live here.

mod body;
mod vec2;

pub use body::Body;
pub use vec2::Vec2;
