//! Deployment configuration, loaded from JSON.
//!
//! Every field has a default, so `{}` is a complete config that reproduces
//! the stock page: five pastel blobs wrapping with an offset.
//!
//! ```json
//! {
//!   "bodyCount": 5,
//!   "boundary": "bounce",
//!   "physics": { "maxSpeed": 6.0, "repelStrength": 0.4 },
//!   "shake": { "normal": 3.0, "strong": 6.0, "motionThreshold": 15.0, "motionCooldownMs": 1000.0 },
//!   "theme": "ocean",
//!   "seed": 42,
//!   "host": { "logoId": "logo", "shakeButtonId": "shake-btn", "themeButtonId": null }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::palette::theme_index;
use super::params::{BoundaryPolicy, PhysicsParams};
use crate::core::error::{BlobError, Result};

/// Upper bound on bodies; collisions are brute-force O(n²).
pub const MAX_BODIES: usize = 64;

/// Impulse ranges and motion-sensor gating for shake triggers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShakeConfig {
    /// Per-axis impulse range width for a normal shake
    pub normal: f32,
    /// Per-axis impulse range width for a strong shake
    pub strong: f32,
    /// |acceleration| on any axis that counts as a shake gesture
    pub motion_threshold: f64,
    pub motion_cooldown_ms: f64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            normal: 3.0,
            strong: 6.0,
            motion_threshold: 15.0,
            motion_cooldown_ms: 1000.0,
        }
    }
}

impl ShakeConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.normal.is_finite() && self.normal >= 0.0) {
            return Err(BlobError::InvalidConfig(format!("shake.normal out of range: {}", self.normal)));
        }
        if !(self.strong.is_finite() && self.strong >= 0.0) {
            return Err(BlobError::InvalidConfig(format!("shake.strong out of range: {}", self.strong)));
        }
        if !(self.motion_threshold.is_finite() && self.motion_threshold > 0.0) {
            return Err(BlobError::InvalidConfig(format!(
                "shake.motionThreshold out of range: {}",
                self.motion_threshold
            )));
        }
        if !(self.motion_cooldown_ms.is_finite() && self.motion_cooldown_ms >= 0.0) {
            return Err(BlobError::InvalidConfig(format!(
                "shake.motionCooldownMs out of range: {}",
                self.motion_cooldown_ms
            )));
        }
        Ok(())
    }
}

/// Element ids the page binding hooks into. Missing elements are skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub logo_id: Option<String>,
    pub shake_button_id: Option<String>,
    pub theme_button_id: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            logo_id: Some("logo".to_string()),
            shake_button_id: Some("shake-btn".to_string()),
            theme_button_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlobConfig {
    pub body_count: usize,
    pub boundary: BoundaryPolicy,
    pub physics: PhysicsParams,
    pub shake: ShakeConfig,
    /// Initial theme name
    pub theme: String,
    /// Fixed RNG seed; a fresh one per page load when absent
    pub seed: Option<u64>,
    pub host: HostConfig,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            body_count: 5,
            boundary: BoundaryPolicy::default(),
            physics: PhysicsParams::default(),
            shake: ShakeConfig::default(),
            theme: "pastel".to_string(),
            seed: None,
            host: HostConfig::default(),
        }
    }
}

impl BlobConfig {
    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BlobConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.body_count == 0 || self.body_count > MAX_BODIES {
            return Err(BlobError::InvalidConfig(format!(
                "bodyCount must be in 1..={MAX_BODIES}, got {}",
                self.body_count
            )));
        }
        if theme_index(&self.theme).is_none() {
            return Err(BlobError::UnknownTheme(self.theme.clone()));
        }
        self.physics.validate()?;
        self.shake.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_stock_page() {
        let config = BlobConfig::from_json("{}").unwrap();
        assert_eq!(config, BlobConfig::default());
        assert_eq!(config.body_count, 5);
        assert_eq!(config.boundary, BoundaryPolicy::WrapWithOffset);
        assert_eq!(config.host.logo_id.as_deref(), Some("logo"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = BlobConfig::from_json(
            r#"{ "boundary": "bounce", "physics": { "maxSpeed": 4.0 }, "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(config.boundary, BoundaryPolicy::Bounce);
        assert_eq!(config.physics.max_speed, 4.0);
        assert_eq!(config.physics.damping, 0.998);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_unknown_boundary() {
        let err = BlobConfig::from_json(r#"{ "boundary": "teleport" }"#).unwrap_err();
        assert!(matches!(err, BlobError::Json(_)));
    }

    #[test]
    fn rejects_zero_bodies() {
        let err = BlobConfig::from_json(r#"{ "bodyCount": 0 }"#).unwrap_err();
        assert!(matches!(err, BlobError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = BlobConfig::from_json(r#"{ "theme": "neon" }"#).unwrap_err();
        assert!(matches!(err, BlobError::UnknownTheme(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let config = BlobConfig { body_count: 3, seed: Some(9), ..Default::default() };
        let back = BlobConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
