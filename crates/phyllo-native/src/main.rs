use anyhow::Context;
use instant::Instant;
use phyllo_core::{
    CircleField, Layout, PointAdder, SimTime, SphereField, SphereLayout, SphereParams,
    SphereSampler, SyncPolicy, TurnAnimator,
};
use rand::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

mod config;
mod sink;

use config::DemoConfig;
use sink::LogSink;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let mut demo = config::load(path.as_deref())?;
    let mut rng = StdRng::seed_from_u64(demo.seed);

    let mut circle = CircleField::new(LogSink::new("circle"));
    circle
        .initialize(&demo.circle.params)
        .context("circle parameters")?;

    let policy = SyncPolicy {
        reposition_on_resize: demo.sphere.reposition_on_resize,
    };
    let mut sphere = SphereField::with_policy(LogSink::new("sphere"), policy);
    sphere
        .initialize(&demo.sphere.field)
        .context("sphere parameters")?;
    let layout = SphereLayout::from_config(&demo.sphere.field)?;
    log::info!(
        "[sphere] {} points in view, marker scale {:.2}",
        sphere.len(),
        layout.point_scale()
    );

    let circle_turn = TurnAnimator {
        step_per_tick: demo.circle.turn_step,
        enabled: demo.circle.animate_turn,
    };
    let sphere_turn = TurnAnimator {
        step_per_tick: demo.sphere.turn_step,
        enabled: demo.sphere.animate_turn,
    };
    let mut adder = PointAdder::default();
    adder.enabled = demo.sphere.animate_adding_points;

    let dt = demo.tick_duration()?;
    let mut elapsed = Duration::ZERO;
    let started = Instant::now();
    let mut circle_actions = 0usize;
    let mut sphere_actions = 0usize;

    for tick in 0..demo.ticks {
        elapsed += dt;
        let time = SimTime::running(elapsed);

        circle_turn.advance(&mut demo.circle.params.turn_fraction);
        sphere_turn.advance(&mut demo.sphere.field.sphere.turn_fraction);
        if adder.tick(dt, &mut demo.sphere.field.sphere.point_count) > 0 {
            log::debug!(
                "[sphere] point_count -> {}",
                demo.sphere.field.sphere.point_count
            );
        }
        if demo.scrub_every > 0 && tick % demo.scrub_every == 0 {
            scrub(&mut rng, &mut demo);
        }

        circle_actions += circle
            .tick(&demo.circle.params, time)
            .with_context(|| format!("circle tick {tick}"))?
            .len();
        sphere_actions += sphere
            .tick(&demo.sphere.field, time)
            .with_context(|| format!("sphere tick {tick}"))?
            .len();
    }

    for (label, sink, actions) in [
        ("circle", circle.sink(), circle_actions),
        ("sphere", sphere.sink(), sphere_actions),
    ] {
        log::info!(
            "[{label}] points={} highlighted={} extent={:.2} actions={} sink_calls={}",
            sink.point_count(),
            sink.highlighted(),
            sink.extent(),
            actions,
            sink.calls
        );
    }

    let sampler = SphereSampler::new(
        SphereParams::new(&demo.sphere.field.sphere)?,
        demo.sphere.field.basis,
    );
    log::info!(
        "[sampler] {} of {} directions in a {:.0} deg cone",
        sampler.vectors().len(),
        sampler.params().point_count(),
        sampler.params().view_angle_degrees()
    );
    log::info!(
        "ran {} ticks ({:.1}s simulated) in {:?}",
        demo.ticks,
        elapsed.as_secs_f32(),
        started.elapsed()
    );
    Ok(())
}

/// Emulates someone dragging an inspector slider: nudges one parameter,
/// keeping it inside its valid range.
fn scrub(rng: &mut StdRng, demo: &mut DemoConfig) {
    let circle = &mut demo.circle.params;
    let sphere = &mut demo.sphere.field;
    match rng.gen_range(0..6) {
        0 => {
            let delta = rng.gen_range(-5i64..=5);
            circle.point_count = (circle.point_count as i64 + delta).max(1) as usize;
        }
        1 => circle.distance_exponent += rng.gen_range(-0.2..0.2),
        2 => {
            circle.highlight_period = rng.gen_range(1..=8);
            circle.highlight_offset = rng.gen_range(0..8);
        }
        3 => {
            let bias = sphere.sphere.distance_bias + rng.gen_range(-0.2..0.2);
            sphere.sphere.distance_bias = bias.clamp(0.0, 5.0);
        }
        4 => sphere.highlight_period = rng.gen_range(0..=6),
        _ => {
            let delta = rng.gen_range(-3i64..=3);
            sphere.sphere.point_count = (sphere.sphere.point_count as i64 + delta).max(1) as usize;
        }
    }
    log::debug!("[scrub] circle={:?} sphere={:?}", circle, sphere.sphere);
}
