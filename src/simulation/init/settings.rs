use crate::core::error::Result;
use crate::domain::config::ShakeConfig;
use crate::domain::params::PhysicsParams;

use super::motion::MotionGate;
use super::perf_stats::PerfStats;
use super::InteractionHost;

pub(super) fn enable_perf_metrics(host: &mut InteractionHost, enabled: bool) {
    host.perf_enabled = enabled;
    if !enabled {
        host.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(host: &InteractionHost) -> PerfStats {
    host.perf_stats.clone()
}

pub(super) fn set_physics_params(host: &mut InteractionHost, params: PhysicsParams) -> Result<()> {
    params.validate()?;
    host.sim.set_params(params);
    Ok(())
}

/// Replace shake tuning. The motion cooldown restarts from scratch.
pub(super) fn set_shake_config(host: &mut InteractionHost, shake: ShakeConfig) -> Result<()> {
    shake.validate()?;
    host.shake = shake;
    host.motion = MotionGate::new(shake.motion_threshold, shake.motion_cooldown_ms);
    Ok(())
}
