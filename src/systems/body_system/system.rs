use rand::Rng;

use crate::body::{Body, Vec2};
use crate::domain::palette::Rgba;
use crate::domain::params::{BoundaryPolicy, PhysicsParams};

use super::boundary::{apply_boundary, clamp_into};
use super::collision::{resolve_collisions, CollisionScratch};
use super::space::SimulationSpace;

/// Owns the blobs and advances them one tick at a time
pub struct BodySimulation {
    bodies: Vec<Body>,
    space: SimulationSpace,
    policy: BoundaryPolicy,
    params: PhysicsParams,
    scratch: CollisionScratch,
}

impl BodySimulation {
    /// Scatter `count` bodies uniformly over the space with random size and drift.
    ///
    /// Colors are assigned round-robin from `colors`.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        width: f32,
        height: f32,
        colors: &[Rgba],
        params: PhysicsParams,
        policy: BoundaryPolicy,
        rng: &mut R,
    ) -> Self {
        let space = SimulationSpace::clamped(width, height);
        let bodies = (0..count)
            .map(|i| {
                let size = sample(rng, params.size_min, params.size_max);
                let pos = Vec2::new(sample(rng, 0.0, space.width), sample(rng, 0.0, space.height));
                let velocity = Vec2::new(
                    sample(rng, -params.initial_speed, params.initial_speed),
                    sample(rng, -params.initial_speed, params.initial_speed),
                );
                let color = pick_color(colors, i);
                Body::new(i as u32, pos, velocity, size, params.mass_divisor, color)
            })
            .collect();

        Self::from_bodies(bodies, space, policy, params)
    }

    /// Wrap an explicit body set (scripted scenes, tests)
    pub fn from_bodies(
        bodies: Vec<Body>,
        space: SimulationSpace,
        policy: BoundaryPolicy,
        params: PhysicsParams,
    ) -> Self {
        Self {
            bodies,
            space,
            policy,
            params,
            scratch: CollisionScratch::default(),
        }
    }

    /// Advance one tick. Returns the number of contacts resolved.
    pub fn step(&mut self) -> usize {
        let contacts = self.resolve_collisions();
        self.advance();
        contacts
    }

    /// Collision phase of `step`: pairwise repulsion from the current positions
    pub fn resolve_collisions(&mut self) -> usize {
        resolve_collisions(
            &mut self.bodies,
            &mut self.scratch,
            &self.space,
            self.policy,
            &self.params,
        )
    }

    /// Kinematic phase of `step`: integrate, drag, speed cap, boundary, squish decay
    pub fn advance(&mut self) {
        let params = &self.params;
        for body in self.bodies.iter_mut() {
            body.integrate(params.damping, params.max_speed);
            apply_boundary(body, &self.space, self.policy, params.bounce_restitution);
            body.decay_squish(params.squish_decay);
        }
    }

    /// Kick a body. `(dx, dy)` is scaled by `impulse_scale`.
    ///
    /// Returns `false` (and changes nothing) for an unknown id.
    pub fn apply_impulse(&mut self, id: u32, dx: f32, dy: f32) -> bool {
        let scale = self.params.impulse_scale;
        match self.bodies.iter_mut().find(|b| b.id == id) {
            Some(body) => {
                body.apply_impulse(Vec2::new(dx, dy) * scale);
                true
            }
            None => false,
        }
    }

    /// Adopt a new viewport and pull bodies back inside it. Velocities are kept.
    pub fn resize(&mut self, space: SimulationSpace) {
        self.space = space;
        for body in self.bodies.iter_mut() {
            clamp_into(body, &self.space, self.policy);
        }
    }

    /// Reassign colors round-robin
    pub fn recolor(&mut self, colors: &[Rgba]) {
        if colors.is_empty() {
            return;
        }
        for (i, body) in self.bodies.iter_mut().enumerate() {
            body.color = colors[i % colors.len()];
        }
    }

    pub fn set_params(&mut self, params: PhysicsParams) {
        self.params = params;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn space(&self) -> SimulationSpace {
        self.space
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }
}

/// Uniform in `[lo, hi)`, or `lo` for an empty range
#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[inline]
fn pick_color(colors: &[Rgba], index: usize) -> Rgba {
    if colors.is_empty() {
        Rgba::default()
    } else {
        colors[index % colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;
    use crate::domain::palette::PASTEL;

    fn scattered(policy: BoundaryPolicy) -> BodySimulation {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        BodySimulation::initialize(5, 1280.0, 720.0, PASTEL.colors, PhysicsParams::default(), policy, &mut rng)
    }

    #[test]
    fn initialize_respects_ranges() {
        let sim = scattered(BoundaryPolicy::WrapWithOffset);
        assert_eq!(sim.len(), 5);
        for (i, body) in sim.bodies().iter().enumerate() {
            assert_eq!(body.id, i as u32);
            assert!((100.0..250.0).contains(&body.size));
            assert!((0.0..1280.0).contains(&body.pos.x));
            assert!((0.0..720.0).contains(&body.pos.y));
            assert!(body.velocity.x.abs() <= 1.0 && body.velocity.y.abs() <= 1.0);
            assert!((body.mass - body.size / 50.0).abs() < 1e-5);
            assert_eq!(body.color, PASTEL.colors[i]);
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = scattered(BoundaryPolicy::Bounce);
        let b = scattered(BoundaryPolicy::Bounce);
        assert_eq!(a.bodies(), b.bodies());
    }

    #[test]
    fn empty_size_range_uses_min() {
        let params = PhysicsParams { size_min: 120.0, size_max: 120.0, initial_speed: 0.0, ..Default::default() };
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let sim = BodySimulation::initialize(3, 500.0, 500.0, PASTEL.colors, params, BoundaryPolicy::Clamp, &mut rng);
        assert!(sim.bodies().iter().all(|b| b.size == 120.0 && b.velocity == Vec2::zero()));
    }

    #[test]
    fn unknown_id_impulse_is_a_no_op() {
        let mut sim = scattered(BoundaryPolicy::Clamp);
        let before = sim.bodies().to_vec();
        assert!(!sim.apply_impulse(99, 1.0, 1.0));
        assert_eq!(sim.bodies(), &before[..]);
    }

    #[test]
    fn resize_keeps_velocity() {
        let mut sim = scattered(BoundaryPolicy::Bounce);
        let velocities: Vec<Vec2> = sim.bodies().iter().map(|b| b.velocity).collect();
        sim.resize(SimulationSpace::clamped(100.0, 50.0));
        for (body, v) in sim.bodies().iter().zip(velocities) {
            assert!(body.pos.x <= 100.0 && body.pos.y <= 50.0);
            assert_eq!(body.velocity, v);
        }
    }

    #[test]
    fn recolor_wraps_short_palettes() {
        let mut sim = scattered(BoundaryPolicy::Clamp);
        let two = [Rgba::new(1, 2, 3, 1.0), Rgba::new(4, 5, 6, 1.0)];
        sim.recolor(&two);
        let colors: Vec<Rgba> = sim.bodies().iter().map(|b| b.color).collect();
        assert_eq!(colors, vec![two[0], two[1], two[0], two[1], two[0]]);
    }
}
