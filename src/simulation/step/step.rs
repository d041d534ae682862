use super::{InteractionHost, PerfTimer};

pub(super) fn step(host: &mut InteractionHost) {
    if host.perf_enabled {
        step_with_perf(host);
    } else {
        host.sim.step();
    }

    host.impulses_since_step = 0;
    host.frame += 1;
}

fn step_with_perf(host: &mut InteractionHost) {
    let step_start = PerfTimer::start();
    host.perf_stats.reset();
    host.perf_stats.body_count = host.sim.len() as u32;
    host.perf_stats.impulses_applied = host.impulses_since_step;

    // Same two phases as `BodySimulation::step`, timed separately
    let (contacts, collision_ms) = PerfTimer::time(|| host.sim.resolve_collisions());
    let ((), integrate_ms) = PerfTimer::time(|| host.sim.advance());

    host.perf_stats.contacts = contacts as u32;
    host.perf_stats.collision_ms = collision_ms;
    host.perf_stats.integrate_ms = integrate_ms;
    host.perf_stats.step_ms = step_start.elapsed_ms();
}
