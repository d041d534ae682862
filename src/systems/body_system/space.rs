use crate::core::error::{BlobError, Result};

/// Viewport the bodies live in (pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSpace {
    pub width: f32,
    pub height: f32,
}

impl SimulationSpace {
    /// Build a space, rejecting non-finite or non-positive sizes
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(BlobError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Build a space, clamping bad sizes to 1px
    pub fn clamped(width: f32, height: f32) -> Self {
        let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        Self { width: fix(width), height: fix(height) }
    }
}
