use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::body_system::{BodySimulation, SimulationSpace};
use crate::core::error::Result;
use crate::domain::config::{BlobConfig, ShakeConfig};
use crate::domain::palette::ThemeCycle;

use super::motion::MotionGate;
use super::perf_stats::PerfStats;
use super::render_extract::RENDER_STRIDE;
use super::InteractionHost;

/// Seed used off wasm32, where there is no page to draw entropy from
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_SEED: u64 = 0x5EED_B10B;

/// A fresh seed per page load
#[cfg(target_arch = "wasm32")]
pub(crate) fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = js_sys::Date::now() as u64;
    (hi << 32) ^ lo
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn entropy_seed() -> u64 {
    NATIVE_SEED
}

pub(super) fn create_host(config: &BlobConfig, width: f32, height: f32, seed: u64) -> Result<InteractionHost> {
    config.validate()?;
    let space = SimulationSpace::new(width, height)?;
    let themes = ThemeCycle::starting_at(&config.theme)?;

    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let sim = BodySimulation::initialize(
        config.body_count,
        space.width,
        space.height,
        themes.current().colors,
        config.physics,
        config.boundary,
        &mut rng,
    );

    console_log!(
        "blob field: {} bodies, {} boundary, {} theme, {}x{}",
        sim.len(),
        config.boundary.name(),
        themes.current().name,
        space.width,
        space.height
    );

    Ok(InteractionHost {
        render_data: Vec::with_capacity(sim.len() * RENDER_STRIDE),
        sim,
        themes,
        shake: config.shake,
        motion: MotionGate::new(config.shake.motion_threshold, config.shake.motion_cooldown_ms),
        rng,
        frame: 0,
        impulses_since_step: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn host_from_simulation(sim: BodySimulation, shake: ShakeConfig, seed: u64) -> InteractionHost {
    InteractionHost {
        render_data: Vec::with_capacity(sim.len() * RENDER_STRIDE),
        sim,
        themes: ThemeCycle::default(),
        shake,
        motion: MotionGate::new(shake.motion_threshold, shake.motion_cooldown_ms),
        rng: ChaCha12Rng::seed_from_u64(seed),
        frame: 0,
        impulses_since_step: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
