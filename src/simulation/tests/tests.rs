use super::*;
use crate::body::{Body, Vec2};
use crate::body_system::SimulationSpace;
use crate::core::error::BlobError;
use crate::domain::palette::{Rgba, THEMES};
use crate::domain::params::BoundaryPolicy;

fn stock_host() -> InteractionHost {
    InteractionHost::with_config(&BlobConfig::default(), 1280.0, 720.0, 42).unwrap()
}

/// Bodies at rest, far apart, so every velocity comes from the shake
fn still_host() -> InteractionHost {
    let bodies = (0..5)
        .map(|i| {
            Body::new(
                i,
                Vec2::new(100.0 + 400.0 * i as f32, 300.0),
                Vec2::zero(),
                100.0,
                50.0,
                Rgba::default(),
            )
        })
        .collect();
    let sim = BodySimulation::from_bodies(
        bodies,
        SimulationSpace::clamped(2200.0, 800.0),
        BoundaryPolicy::Clamp,
        PhysicsParams::default(),
    );
    InteractionHost::from_simulation(sim, ShakeConfig::default(), 3)
}

fn max_component(host: &InteractionHost) -> f32 {
    host.simulation()
        .bodies()
        .iter()
        .map(|b| b.velocity.x.abs().max(b.velocity.y.abs()))
        .fold(0.0, f32::max)
}

#[test]
fn normal_shake_stays_in_range_and_kicks_everyone() {
    let mut host = still_host();
    host.shake_button();

    // each axis in [-1.5, 1.5) before the 1.5x impulse scale
    assert!(max_component(&host) <= 1.5 * 1.5);
    for body in host.simulation().bodies() {
        assert_eq!(body.squish, 1.0);
        assert_eq!(body.pulse_generation, 1);
    }
}

#[test]
fn strong_shake_uses_double_range() {
    let mut normal = still_host();
    let mut strong = still_host();
    normal.trigger_shake(ShakeStrength::Normal);
    strong.logo_focus();

    // same seed, same draws: strong kicks are exactly twice the normal ones
    for (n, s) in normal
        .simulation()
        .bodies()
        .iter()
        .zip(strong.simulation().bodies())
    {
        assert!((s.velocity.x - 2.0 * n.velocity.x).abs() < 1e-5);
        assert!((s.velocity.y - 2.0 * n.velocity.y).abs() < 1e-5);
    }
    assert!(max_component(&strong) <= 3.0 * 1.5);
}

#[test]
fn shake_directions_are_independent() {
    let mut host = still_host();
    host.shake_button();
    let bodies = host.simulation().bodies();
    let first = bodies[0].velocity;
    assert!(bodies[1..].iter().any(|b| b.velocity != first));
}

#[test]
fn motion_shakes_are_rate_limited() {
    let mut host = still_host();
    let hard = Some(MotionReading::new(Some(25.0), None, None));

    assert!(host.observe_motion(10_000.0, hard));
    assert!(!host.observe_motion(10_500.0, hard));
    assert!(!host.observe_motion(10_999.0, hard));
    assert_eq!(host.simulation().bodies()[0].pulse_generation, 1);

    assert!(host.observe_motion(11_000.0, hard));
    assert_eq!(host.simulation().bodies()[0].pulse_generation, 2);
}

#[test]
fn missing_motion_reading_changes_nothing() {
    let mut host = still_host();
    assert!(!host.observe_motion(0.0, None));
    assert!(host.simulation().bodies().iter().all(|b| b.velocity == Vec2::zero()));
}

#[test]
fn impulse_on_body_at_rest_moves_it_by_impulse_scale() {
    let mut host = still_host();
    assert!(host.apply_impulse(2, 1.0, 0.0));
    let body = host.simulation().body(2).unwrap();
    assert!(body.velocity.x > 0.0);
    assert!((body.velocity.x - 1.5).abs() < 1e-6);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn non_finite_impulse_is_rejected() {
    let mut host = still_host();
    assert!(!host.apply_impulse(0, f32::NAN, 0.0));
    assert_eq!(host.simulation().body(0).unwrap().velocity, Vec2::zero());
}

#[test]
fn invalid_resize_is_rejected_without_moving_anything() {
    let mut host = stock_host();
    let before = host.simulation().bodies().to_vec();
    let err = host.resize(0.0, 600.0).unwrap_err();
    assert!(matches!(err, BlobError::InvalidViewport { .. }));
    assert_eq!(host.simulation().bodies(), &before[..]);
    assert_eq!(host.simulation().space().width, 1280.0);
}

#[test]
fn resize_reclamps_positions() {
    let mut host = InteractionHost::with_config(
        &BlobConfig { boundary: BoundaryPolicy::Bounce, ..BlobConfig::default() },
        1280.0,
        720.0,
        9,
    )
    .unwrap();
    host.resize(320.0, 240.0).unwrap();
    for body in host.simulation().bodies() {
        assert!((0.0..=320.0).contains(&body.pos.x));
        assert!((0.0..=240.0).contains(&body.pos.y));
    }
}

#[test]
fn change_theme_cycles_and_recolors() {
    let mut host = stock_host();
    assert_eq!(host.theme().name, "pastel");

    let next = host.change_theme();
    assert_eq!(next.name, THEMES[1].name);
    for (i, body) in host.simulation().bodies().iter().enumerate() {
        assert_eq!(body.color, next.color_for(i));
    }

    for _ in 1..THEMES.len() {
        host.change_theme();
    }
    assert_eq!(host.theme().name, "pastel");
}

#[test]
fn set_theme_by_name() {
    let mut host = stock_host();
    let forest = host.set_theme("forest").unwrap();
    // five bodies over a three-color palette wrap round-robin
    let colors: Vec<Rgba> = host.simulation().bodies().iter().map(|b| b.color).collect();
    assert_eq!(colors[3], forest.colors[0]);
    assert_eq!(colors[4], forest.colors[1]);
    assert!(host.set_theme("neon").is_err());
    assert_eq!(host.theme().name, "forest");
}

#[test]
fn step_advances_frame_and_records_perf() {
    let mut host = stock_host();
    host.enable_perf_metrics(true);
    host.shake_button();
    host.step();

    assert_eq!(host.frame(), 1);
    let stats = host.perf_stats();
    assert_eq!(stats.body_count(), 5);
    assert_eq!(stats.impulses_applied(), 5);
    assert!(stats.step_ms() >= 0.0);

    host.step();
    assert_eq!(host.perf_stats().impulses_applied(), 0);
}

#[test]
fn perf_stays_zero_when_disabled() {
    let mut host = stock_host();
    host.step();
    assert_eq!(host.perf_stats(), PerfStats::default());
}

#[test]
fn render_buffer_matches_views() {
    let mut host = stock_host();
    host.logo_focus();
    host.step();

    let count = host.collect_render_data();
    assert_eq!(count, 5);
    let data = host.render_data();
    assert_eq!(data.len(), count * RENDER_STRIDE);

    for (i, view) in host.body_views().enumerate() {
        let row = &data[i * RENDER_STRIDE..(i + 1) * RENDER_STRIDE];
        assert_eq!(row[0], view.x);
        assert_eq!(row[1], view.y);
        assert_eq!(row[2], view.size);
        assert_eq!(row[3], view.scale_x);
        assert_eq!(row[4], view.scale_y);
        assert_eq!(row[5], view.squish);
        assert_eq!(row[6], 1.0);
        // squish = 0.9 after one decay: widened, flattened
        assert!(view.scale_x > 1.0 && view.scale_y < 1.0);
    }
}

#[test]
fn css_transform_centres_the_element() {
    let view = BodyView {
        id: 0,
        x: 200.0,
        y: 100.0,
        size: 100.0,
        scale_x: 1.1,
        scale_y: 0.9,
        squish: 0.5,
        pulse_generation: 0,
        color: Rgba::default(),
    };
    assert_eq!(view.css_transform(), "translate(150px, 50px) scale(1.1, 0.9)");
}

#[test]
fn invalid_physics_params_are_rejected() {
    let mut host = stock_host();
    let bad = PhysicsParams { max_speed: -1.0, ..PhysicsParams::default() };
    assert!(host.set_physics_params(bad).is_err());
    assert_eq!(host.simulation().params().max_speed, 8.0);
}

#[test]
fn shake_config_update_rearms_motion_gate() {
    let mut host = still_host();
    let hard = Some(MotionReading::new(Some(25.0), None, None));
    assert!(host.observe_motion(0.0, hard));
    host.set_shake_config(ShakeConfig { motion_cooldown_ms: 5.0, ..ShakeConfig::default() })
        .unwrap();
    assert!(host.observe_motion(1.0, hard));
}
