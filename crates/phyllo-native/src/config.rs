// Demo configuration. Everything is optional; a missing file or missing
// keys fall back to the core defaults.

use anyhow::Context;
use phyllo_core::{CircleConfig, SphereFieldConfig, TURN_STEP_PER_TICK};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub ticks: u32,
    pub tick_hz: f32,
    pub seed: u64,
    /// Randomly nudge one parameter every this many ticks. Zero disables.
    pub scrub_every: u32,
    pub circle: CircleDemo,
    pub sphere: SphereDemo,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            tick_hz: 60.0,
            seed: 42,
            scrub_every: 0,
            circle: CircleDemo::default(),
            sphere: SphereDemo::default(),
        }
    }
}

impl DemoConfig {
    /// Length of one tick, rejecting rates whose period does not fit a `Duration`.
    pub fn tick_duration(&self) -> anyhow::Result<Duration> {
        anyhow::ensure!(
            self.tick_hz > 0.0 && self.tick_hz.is_finite(),
            "tick_hz must be positive, got {}",
            self.tick_hz
        );
        Duration::try_from_secs_f32(1.0 / self.tick_hz)
            .with_context(|| format!("tick_hz {} gives no usable tick length", self.tick_hz))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CircleDemo {
    pub params: CircleConfig,
    pub animate_turn: bool,
    pub turn_step: f32,
}

impl Default for CircleDemo {
    fn default() -> Self {
        Self {
            params: CircleConfig::default(),
            animate_turn: true,
            turn_step: TURN_STEP_PER_TICK,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SphereDemo {
    pub field: SphereFieldConfig,
    pub animate_turn: bool,
    pub turn_step: f32,
    pub animate_adding_points: bool,
    pub reposition_on_resize: bool,
}

impl Default for SphereDemo {
    fn default() -> Self {
        Self {
            field: SphereFieldConfig::default(),
            animate_turn: false,
            turn_step: TURN_STEP_PER_TICK,
            animate_adding_points: true,
            reposition_on_resize: true,
        }
    }
}

pub fn load(path: Option<&Path>) -> anyhow::Result<DemoConfig> {
    let Some(path) = path else {
        log::info!("[config] no file given, using defaults");
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: DemoConfig =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config.tick_duration()?;
    log::info!("[config] loaded {}", path.display());
    Ok(config)
}
