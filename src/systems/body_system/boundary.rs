use crate::body::Body;
use crate::domain::params::BoundaryPolicy;

use super::space::SimulationSpace;

/// Bring a body that left the space back according to `policy`.
pub(super) fn apply_boundary(
    body: &mut Body,
    space: &SimulationSpace,
    policy: BoundaryPolicy,
    restitution: f32,
) {
    match policy {
        BoundaryPolicy::Toroidal => {
            body.pos.x = wrap_euclid(body.pos.x, space.width);
            body.pos.y = wrap_euclid(body.pos.y, space.height);
        }
        BoundaryPolicy::WrapWithOffset => {
            let size = body.size;
            body.pos.x = wrap_with_offset(body.pos.x, space.width, size);
            body.pos.y = wrap_with_offset(body.pos.y, space.height, size);
        }
        BoundaryPolicy::Bounce => {
            bounce_axis(&mut body.pos.x, &mut body.velocity.x, space.width, restitution);
            bounce_axis(&mut body.pos.y, &mut body.velocity.y, space.height, restitution);
        }
        BoundaryPolicy::Clamp => {
            body.pos.x = body.pos.x.clamp(0.0, space.width);
            body.pos.y = body.pos.y.clamp(0.0, space.height);
        }
    }
}

/// Clamp a body into the range `resize` allows for `policy`, leaving velocity alone.
///
/// Offset wrapping lets bodies sit up to one size outside the viewport,
/// so resizing only pulls in the ones beyond that margin.
pub(super) fn clamp_into(body: &mut Body, space: &SimulationSpace, policy: BoundaryPolicy) {
    let margin = match policy {
        BoundaryPolicy::WrapWithOffset => body.size,
        _ => 0.0,
    };
    body.pos.x = body.pos.x.clamp(-margin, space.width + margin);
    body.pos.y = body.pos.y.clamp(-margin, space.height + margin);
}

#[inline]
fn wrap_euclid(v: f32, extent: f32) -> f32 {
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

#[inline]
fn wrap_with_offset(v: f32, extent: f32, size: f32) -> f32 {
    if v < -size {
        extent + size * 0.5
    } else if v > extent + size {
        -size * 0.5
    } else {
        v
    }
}

#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, extent: f32, restitution: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        if *vel < 0.0 {
            *vel = -*vel * restitution;
        }
    } else if *pos > extent {
        *pos = extent;
        if *vel > 0.0 {
            *vel = -*vel * restitution;
        }
    }
}
