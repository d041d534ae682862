use rand::Rng;

use crate::body_system::SimulationSpace;
use crate::core::error::Result;
use crate::domain::palette::Palette;

use super::motion::MotionReading;
use super::InteractionHost;

/// How hard a shake trigger kicks the bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakeStrength {
    /// Shake button, device motion
    Normal,
    /// Logo hover/touch; double the normal range by default
    Strong,
}

/// Every body gets its own random kick, each axis uniform in `[-m/2, m/2)`.
pub(super) fn trigger_shake(host: &mut InteractionHost, strength: ShakeStrength) {
    let magnitude = match strength {
        ShakeStrength::Normal => host.shake.normal,
        ShakeStrength::Strong => host.shake.strong,
    };

    let ids: Vec<u32> = host.sim.bodies().iter().map(|b| b.id).collect();
    for id in ids {
        let dx = (host.rng.gen::<f32>() - 0.5) * magnitude;
        let dy = (host.rng.gen::<f32>() - 0.5) * magnitude;
        apply_impulse(host, id, dx, dy);
    }
}

pub(super) fn observe_motion(host: &mut InteractionHost, now_ms: f64, reading: Option<MotionReading>) -> bool {
    if !host.motion.accept(now_ms, reading) {
        return false;
    }
    trigger_shake(host, ShakeStrength::Normal);
    true
}

pub(super) fn apply_impulse(host: &mut InteractionHost, id: u32, dx: f32, dy: f32) -> bool {
    if !(dx.is_finite() && dy.is_finite()) {
        return false;
    }
    let applied = host.sim.apply_impulse(id, dx, dy);
    if applied {
        host.impulses_since_step = host.impulses_since_step.saturating_add(1);
    }
    applied
}

pub(super) fn resize(host: &mut InteractionHost, width: f32, height: f32) -> Result<()> {
    let space = SimulationSpace::new(width, height)?;
    host.sim.resize(space);
    Ok(())
}

pub(super) fn change_theme(host: &mut InteractionHost) -> &'static Palette {
    let palette = host.themes.advance();
    host.sim.recolor(palette.colors);
    console_log!("blob theme: {}", palette.name);
    palette
}

pub(super) fn set_theme(host: &mut InteractionHost, name: &str) -> Result<&'static Palette> {
    let palette = host.themes.select(name)?;
    host.sim.recolor(palette.colors);
    console_log!("blob theme: {}", palette.name);
    Ok(palette)
}
