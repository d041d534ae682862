use serde::{Deserialize, Serialize};

use crate::core::error::{BlobError, Result};

/// What happens when a body leaves the simulation space.
///
/// Chosen once per deployment; a run never mixes policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoundaryPolicy {
    /// Leaving `[0, extent)` re-enters at the opposite edge in the same tick.
    Toroidal,
    /// A body more than one size past an edge reappears half a size beyond
    /// the opposite edge, so it slides back into view instead of popping.
    #[default]
    WrapWithOffset,
    /// Normal velocity is reflected and attenuated, position clamped.
    Bounce,
    /// Position clamped, velocity untouched.
    Clamp,
}

impl BoundaryPolicy {
    /// Wrapping policies measure pair distances the short way around.
    #[inline]
    pub fn wraps(self) -> bool {
        matches!(self, BoundaryPolicy::Toroidal | BoundaryPolicy::WrapWithOffset)
    }

    pub fn name(self) -> &'static str {
        match self {
            BoundaryPolicy::Toroidal => "toroidal",
            BoundaryPolicy::WrapWithOffset => "wrapWithOffset",
            BoundaryPolicy::Bounce => "bounce",
            BoundaryPolicy::Clamp => "clamp",
        }
    }
}

/// Tuning knobs for the blob physics. Units are pixels and ticks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsParams {
    /// Peak velocity change per contact at full overlap
    pub repel_strength: f32,
    /// Per-tick velocity multiplier (drag)
    pub damping: f32,
    /// Speed cap, pixels per tick
    pub max_speed: f32,
    /// Multiplier applied to external impulses
    pub impulse_scale: f32,
    /// Per-tick squish multiplier
    pub squish_decay: f32,
    /// Penetration depth (px) that maps to full squish
    pub squish_depth_scale: f32,
    /// Visual deformation amplitude at squish = 1
    pub squish_scale: f32,
    /// Velocity kept after a bounce
    pub bounce_restitution: f32,
    pub size_min: f32,
    pub size_max: f32,
    /// Initial velocity range per axis is `[-initial_speed, initial_speed)`
    pub initial_speed: f32,
    /// `mass = size / mass_divisor`
    pub mass_divisor: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            repel_strength: 0.5,
            damping: 0.998,
            max_speed: 8.0,
            impulse_scale: 1.5,
            squish_decay: 0.9,
            squish_depth_scale: 10.0,
            squish_scale: 0.2,
            bounce_restitution: 0.95,
            size_min: 100.0,
            size_max: 250.0,
            initial_speed: 1.0,
            mass_divisor: 50.0,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> Result<()> {
        let checks: [(&str, f32, bool); 12] = [
            ("repelStrength", self.repel_strength, self.repel_strength >= 0.0),
            ("damping", self.damping, self.damping > 0.0 && self.damping <= 1.0),
            ("maxSpeed", self.max_speed, self.max_speed > 0.0),
            ("impulseScale", self.impulse_scale, self.impulse_scale >= 0.0),
            ("squishDecay", self.squish_decay, (0.0..1.0).contains(&self.squish_decay)),
            ("squishDepthScale", self.squish_depth_scale, self.squish_depth_scale > 0.0),
            ("squishScale", self.squish_scale, (0.0..1.0).contains(&self.squish_scale)),
            (
                "bounceRestitution",
                self.bounce_restitution,
                (0.0..=1.0).contains(&self.bounce_restitution),
            ),
            ("sizeMin", self.size_min, self.size_min > 0.0),
            ("sizeMax", self.size_max, self.size_max >= self.size_min),
            ("initialSpeed", self.initial_speed, self.initial_speed >= 0.0),
            ("massDivisor", self.mass_divisor, self.mass_divisor > 0.0),
        ];

        for (name, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(BlobError::InvalidConfig(format!("{name} out of range: {value}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PhysicsParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_size_range() {
        let params = PhysicsParams { size_min: 200.0, size_max: 100.0, ..Default::default() };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("sizeMax"));
    }

    #[test]
    fn rejects_nan() {
        let params = PhysicsParams { damping: f32::NAN, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn only_wrapping_policies_wrap() {
        assert!(BoundaryPolicy::Toroidal.wraps());
        assert!(BoundaryPolicy::WrapWithOffset.wraps());
        assert!(!BoundaryPolicy::Bounce.wraps());
        assert!(!BoundaryPolicy::Clamp.wraps());
    }
}
