//! InteractionHost - bridges page events to the blob simulation
//!
//! Owns the `BodySimulation` plus everything an event needs on top of it:
//! the shake RNG, the motion-sensor gate, the theme cycle and perf counters.
//! Events are applied immediately, in arrival order. Nothing here touches
//! the DOM, so the whole contract is testable natively.
//!
//! - commands/  - shake, impulse, resize, theme
//! - init/      - construction, runtime settings
//! - input/     - device-motion gating
//! - step/      - per-frame update
//! - render/    - read-back for renderers
//! - perf/      - optional timing

use rand_chacha::ChaCha12Rng;

use crate::body_system::BodySimulation;
use crate::core::error::Result;
use crate::domain::config::{BlobConfig, ShakeConfig};
use crate::domain::palette::{Palette, ThemeCycle};
use crate::domain::params::PhysicsParams;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "input/motion.rs"]
mod motion;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::ShakeStrength;
pub use facade::BlobField;
pub use motion::{MotionGate, MotionReading};
pub use perf_stats::PerfStats;
pub use render_extract::{BodyView, RENDER_STRIDE};

pub(crate) use init::entropy_seed;

use perf_timer::PerfTimer;

/// The event-facing owner of one blob field
pub struct InteractionHost {
    sim: BodySimulation,
    themes: ThemeCycle,
    shake: ShakeConfig,
    motion: MotionGate,
    rng: ChaCha12Rng,

    // State
    frame: u64,
    impulses_since_step: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render_data: Vec<f32>,
}

impl InteractionHost {
    /// Default configuration with a fresh random seed
    pub fn new(width: f32, height: f32) -> Result<Self> {
        init::create_host(&BlobConfig::default(), width, height, entropy_seed())
    }

    /// Validate `config` and scatter its bodies over a `width` x `height` viewport.
    ///
    /// `seed` drives both the initial scatter and every later shake.
    pub fn with_config(config: &BlobConfig, width: f32, height: f32, seed: u64) -> Result<Self> {
        init::create_host(config, width, height, seed)
    }

    /// Wrap an already-built simulation (scripted scenes, tests)
    pub fn from_simulation(sim: BodySimulation, shake: ShakeConfig, seed: u64) -> Self {
        init::host_from_simulation(sim, shake, seed)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn simulation(&self) -> &BodySimulation {
        &self.sim
    }

    pub fn body_count(&self) -> usize {
        self.sim.len()
    }

    // === SETTINGS ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_physics_params(&mut self, params: PhysicsParams) -> Result<()> {
        settings::set_physics_params(self, params)
    }

    pub fn set_shake_config(&mut self, shake: ShakeConfig) -> Result<()> {
        settings::set_shake_config(self, shake)
    }

    pub fn shake_config(&self) -> ShakeConfig {
        self.shake
    }

    // === EVENTS ===

    /// Kick every body in an independent random direction
    pub fn trigger_shake(&mut self, strength: ShakeStrength) {
        commands::trigger_shake(self, strength);
    }

    /// Logo hovered or touched: strong shake
    pub fn logo_focus(&mut self) {
        commands::trigger_shake(self, ShakeStrength::Strong);
    }

    /// Shake button pressed: normal shake
    pub fn shake_button(&mut self) {
        commands::trigger_shake(self, ShakeStrength::Normal);
    }

    /// Feed one device-motion reading. Returns `true` if it triggered a shake.
    pub fn observe_motion(&mut self, now_ms: f64, reading: Option<MotionReading>) -> bool {
        commands::observe_motion(self, now_ms, reading)
    }

    pub fn apply_impulse(&mut self, id: u32, dx: f32, dy: f32) -> bool {
        commands::apply_impulse(self, id, dx, dy)
    }

    /// Viewport changed. Invalid sizes are rejected and nothing moves.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        commands::resize(self, width, height)
    }

    // === THEMES ===

    pub fn theme(&self) -> &'static Palette {
        self.themes.current()
    }

    /// Advance to the next palette and recolor every body
    pub fn change_theme(&mut self) -> &'static Palette {
        commands::change_theme(self)
    }

    pub fn set_theme(&mut self, name: &str) -> Result<&'static Palette> {
        commands::set_theme(self, name)
    }

    // === FRAME ===

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Per-body render state, in body order
    pub fn body_views(&self) -> impl Iterator<Item = BodyView> + '_ {
        render_extract::body_views(self)
    }

    /// Pack render state into the flat `f32` buffer; returns the body count
    pub fn collect_render_data(&mut self) -> usize {
        render_extract::collect_render_data(self)
    }

    pub fn render_data(&self) -> &[f32] {
        &self.render_data
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
