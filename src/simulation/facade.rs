use wasm_bindgen::prelude::*;

use crate::domain::config::BlobConfig;

use super::perf_stats::PerfStats;
use super::render_extract::{BodyView, RENDER_STRIDE};
use super::{entropy_seed, InteractionHost, MotionReading, ShakeStrength};

/// JS-driven blob field: the page owns the frame loop, calls `step()` and
/// reads positions back through getters or the packed render buffer.
#[wasm_bindgen]
pub struct BlobField {
    core: InteractionHost,
}

#[wasm_bindgen]
impl BlobField {
    /// Default configuration with a fresh random seed
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<BlobField, JsValue> {
        Self::with_seed(width, height, entropy_seed())
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Result<BlobField, JsValue> {
        let core = InteractionHost::with_config(&BlobConfig::default(), width, height, seed)?;
        Ok(Self { core })
    }

    /// Build from a JSON config (see `BlobConfig`); missing fields take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str, width: f32, height: f32) -> Result<BlobField, JsValue> {
        let config = BlobConfig::from_json(json)?;
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let core = InteractionHost::with_config(&config, width, height, seed)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.simulation().space().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.simulation().space().height }

    #[wasm_bindgen(getter)]
    pub fn boundary(&self) -> String {
        self.core.simulation().policy().name().to_string()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    // === EVENTS ===

    pub fn trigger_shake(&mut self, strong: bool) {
        let strength = if strong { ShakeStrength::Strong } else { ShakeStrength::Normal };
        self.core.trigger_shake(strength);
    }

    pub fn logo_focus(&mut self) {
        self.core.logo_focus();
    }

    pub fn shake_button(&mut self) {
        self.core.shake_button();
    }

    /// Feed a devicemotion reading (`accelerationIncludingGravity`).
    /// Returns true if it triggered a shake.
    pub fn observe_motion(&mut self, now_ms: f64, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> bool {
        let reading = if x.is_none() && y.is_none() && z.is_none() {
            None
        } else {
            Some(MotionReading::new(x, y, z))
        };
        self.core.observe_motion(now_ms, reading)
    }

    pub fn apply_impulse(&mut self, id: u32, dx: f32, dy: f32) -> bool {
        self.core.apply_impulse(id, dx, dy)
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.resize(width, height)?;
        Ok(())
    }

    // === THEMES ===

    /// Advance to the next theme; returns its name
    pub fn change_theme(&mut self) -> String {
        self.core.change_theme().name.to_string()
    }

    pub fn set_theme(&mut self, name: &str) -> Result<(), JsValue> {
        self.core.set_theme(name)?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn theme_name(&self) -> String {
        self.core.theme().name.to_string()
    }

    // === PER-BODY READ-BACK ===

    pub fn body_x(&self, index: usize) -> f32 {
        self.view(index).map(|v| v.x).unwrap_or(0.0)
    }

    pub fn body_y(&self, index: usize) -> f32 {
        self.view(index).map(|v| v.y).unwrap_or(0.0)
    }

    pub fn body_size(&self, index: usize) -> f32 {
        self.view(index).map(|v| v.size).unwrap_or(0.0)
    }

    pub fn body_scale_x(&self, index: usize) -> f32 {
        self.view(index).map(|v| v.scale_x).unwrap_or(1.0)
    }

    pub fn body_scale_y(&self, index: usize) -> f32 {
        self.view(index).map(|v| v.scale_y).unwrap_or(1.0)
    }

    pub fn body_squish(&self, index: usize) -> f32 {
        self.view(index).map(|v| v.squish).unwrap_or(0.0)
    }

    /// Changes whenever the body received an impulse; restart the pulse animation then
    pub fn body_pulse(&self, index: usize) -> u32 {
        self.view(index).map(|v| v.pulse_generation).unwrap_or(0)
    }

    /// CSS color string
    pub fn body_color(&self, index: usize) -> String {
        self.view(index).map(|v| v.color.to_css()).unwrap_or_default()
    }

    pub fn body_transform(&self, index: usize) -> String {
        self.view(index).map(|v| v.css_transform()).unwrap_or_default()
    }

    // === PACKED RENDER BUFFER ===

    /// Refresh the packed buffer; returns the body count
    pub fn collect_render_data(&mut self) -> usize {
        self.core.collect_render_data()
    }

    /// Pointer to the packed buffer (for a Float32Array view over wasm memory)
    pub fn render_data_ptr(&self) -> *const f32 {
        self.core.render_data().as_ptr()
    }

    /// Length of the packed buffer in floats
    pub fn render_data_len(&self) -> usize {
        self.core.render_data().len()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }

    pub fn config_json(&self) -> String {
        let sim = self.core.simulation();
        let config = BlobConfig {
            body_count: sim.len(),
            boundary: sim.policy(),
            physics: *sim.params(),
            shake: self.core.shake_config(),
            theme: self.core.theme().name.to_string(),
            ..BlobConfig::default()
        };
        config.to_json()
    }
}

impl BlobField {
    pub fn host(&self) -> &InteractionHost {
        &self.core
    }

    pub fn host_mut(&mut self) -> &mut InteractionHost {
        &mut self.core
    }

    fn view(&self, index: usize) -> Option<BodyView> {
        self.core.body_views().nth(index)
    }
}
