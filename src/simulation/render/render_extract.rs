use crate::domain::palette::Rgba;

use super::InteractionHost;

/// Floats per body in the packed render buffer:
/// `[x, y, size, scale_x, scale_y, squish, pulse_generation]`
pub const RENDER_STRIDE: usize = 7;

/// What a renderer needs to draw one body this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub squish: f32,
    pub pulse_generation: u32,
    pub color: Rgba,
}

impl BodyView {
    /// CSS transform centring a `size` x `size` element on the body
    pub fn css_transform(&self) -> String {
        let half = self.size * 0.5;
        format!(
            "translate({}px, {}px) scale({}, {})",
            self.x - half,
            self.y - half,
            self.scale_x,
            self.scale_y
        )
    }
}

pub(super) fn body_views(host: &InteractionHost) -> impl Iterator<Item = BodyView> + '_ {
    let squish_scale = host.sim.params().squish_scale;
    host.sim.bodies().iter().map(move |body| {
        let (scale_x, scale_y) = body.scale(squish_scale);
        BodyView {
            id: body.id,
            x: body.pos.x,
            y: body.pos.y,
            size: body.size,
            scale_x,
            scale_y,
            squish: body.squish,
            pulse_generation: body.pulse_generation,
            color: body.color,
        }
    })
}

pub(super) fn collect_render_data(host: &mut InteractionHost) -> usize {
    let mut data = std::mem::take(&mut host.render_data);
    data.clear();
    for view in body_views(host) {
        data.extend_from_slice(&[
            view.x,
            view.y,
            view.size,
            view.scale_x,
            view.scale_y,
            view.squish,
            view.pulse_generation as f32,
        ]);
    }
    host.render_data = data;
    host.sim.len()
}
