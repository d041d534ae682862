//! Domain data: palettes, physics parameters, deployment configuration

pub mod config;
pub mod palette;
pub mod params;

pub use config::{BlobConfig, HostConfig, ShakeConfig, MAX_BODIES};
pub use palette::{Palette, Rgba, ThemeCycle, THEMES};
pub use params::{BoundaryPolicy, PhysicsParams};
