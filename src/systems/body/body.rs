use crate::domain::palette::Rgba;

use super::vec2::Vec2;

/// A blob - one circular body
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Unique ID for this body
    pub id: u32,

    // === Kinematic State ===
    /// Centre position (pixels)
    pub pos: Vec2,
    /// Velocity vector (pixels per tick)
    pub velocity: Vec2,
    /// Diameter (pixels)
    pub size: f32,
    /// Proportional to size
    pub mass: f32,

    // === Visual State ===
    /// Transient deformation in [0, 1], decays every tick
    pub squish: f32,
    /// Bumped on every external impulse; renderers restart the pulse when it changes
    pub pulse_generation: u32,
    pub color: Rgba,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, velocity: Vec2, size: f32, mass_divisor: f32, color: Rgba) -> Self {
        Self {
            id,
            pos,
            velocity,
            size,
            mass: size / mass_divisor,
            squish: 0.0,
            pulse_generation: 0,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Add an already-scaled velocity change and start the squish/pulse emphasis
    pub fn apply_impulse(&mut self, delta_v: Vec2) {
        self.velocity += delta_v;
        self.squish = 1.0;
        self.pulse_generation = self.pulse_generation.wrapping_add(1);
    }

    /// Raise squish to `intensity` (capped at 1); a weaker hit never lowers it
    #[inline]
    pub fn bump_squish(&mut self, intensity: f32) {
        self.squish = self.squish.max(intensity.min(1.0));
    }

    /// Rescale velocity to `max_speed` if faster, keeping direction
    pub fn clamp_speed(&mut self, max_speed: f32) {
        let speed = self.speed();
        if speed > max_speed {
            self.velocity = self.velocity * (max_speed / speed);
        }
    }

    /// Integrate one tick: move, apply drag, cap speed
    pub fn integrate(&mut self, damping: f32, max_speed: f32) {
        self.pos += self.velocity;
        self.velocity = self.velocity * damping;
        self.clamp_speed(max_speed);
    }

    #[inline]
    pub fn decay_squish(&mut self, factor: f32) {
        self.squish *= factor;
    }

    /// Render scale `(x, y)`: widen and flatten proportionally to squish
    pub fn scale(&self, squish_scale: f32) -> (f32, f32) {
        let amount = squish_scale * self.squish;
        (1.0 + amount, 1.0 - amount)
    }
}
