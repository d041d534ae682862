use crate::body::{Body, Vec2};
use crate::domain::params::{BoundaryPolicy, PhysicsParams};

use super::space::SimulationSpace;

/// Result of one overlapping pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Velocity change for the second body; the first gets the negation
    pub impulse: Vec2,
    /// Squish intensity for both bodies, in [0, 1]
    pub squish: f32,
    /// Overlap in pixels
    pub depth: f32,
}

/// Per-step accumulation buffers, kept across steps to avoid reallocating
#[derive(Default)]
pub(super) struct CollisionScratch {
    deltas: Vec<Vec2>,
    squish: Vec<f32>,
}

/// Shorter of the direct and wrap-around offset along one axis
#[inline]
fn wrap_axis(d: f32, extent: f32) -> f32 {
    if d.abs() > extent * 0.5 {
        if d > 0.0 {
            d - extent
        } else {
            d + extent
        }
    } else {
        d
    }
}

/// Offset from `from` to `to`, taking the short way round under wrapping policies
pub fn displacement(from: Vec2, to: Vec2, space: &SimulationSpace, policy: BoundaryPolicy) -> Vec2 {
    let d = to - from;
    if policy.wraps() {
        Vec2::new(wrap_axis(d.x, space.width), wrap_axis(d.y, space.height))
    } else {
        d
    }
}

/// Test one pair. `None` when apart, when either radius is degenerate, or
/// when both sides are the same body.
pub fn contact(
    a: &Body,
    b: &Body,
    space: &SimulationSpace,
    policy: BoundaryPolicy,
    params: &PhysicsParams,
) -> Option<Contact> {
    if a.id == b.id {
        return None;
    }
    // Zero-size bodies would divide by a zero min distance.
    if a.radius() <= 0.0 || b.radius() <= 0.0 {
        return None;
    }

    let d = displacement(a.pos, b.pos, space, policy);
    let distance = d.length();
    let min_distance = a.radius() + b.radius();
    if !(distance < min_distance) {
        return None;
    }

    let depth = min_distance - distance;
    let force = params.repel_strength * depth / min_distance;
    Some(Contact {
        impulse: Vec2::from_angle(d.angle()) * force,
        squish: (depth / params.squish_depth_scale).min(1.0),
        depth,
    })
}

/// Resolve every unordered pair against the pre-step positions, then apply
/// the accumulated deltas. Returns the number of contacts.
pub(super) fn resolve_collisions(
    bodies: &mut [Body],
    scratch: &mut CollisionScratch,
    space: &SimulationSpace,
    policy: BoundaryPolicy,
    params: &PhysicsParams,
) -> usize {
    let n = bodies.len();
    scratch.deltas.clear();
    scratch.deltas.resize(n, Vec2::zero());
    scratch.squish.clear();
    scratch.squish.resize(n, 0.0);

    let mut contacts = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let Some(c) = contact(&bodies[i], &bodies[j], space, policy, params) else {
                continue;
            };
            scratch.deltas[i] -= c.impulse;
            scratch.deltas[j] += c.impulse;
            scratch.squish[i] = scratch.squish[i].max(c.squish);
            scratch.squish[j] = scratch.squish[j].max(c.squish);
            contacts += 1;
        }
    }

    if contacts > 0 {
        for (body, (delta, squish)) in bodies
            .iter_mut()
            .zip(scratch.deltas.iter().zip(scratch.squish.iter()))
        {
            body.velocity += *delta;
            body.bump_squish(*squish);
        }
    }
    contacts
}
