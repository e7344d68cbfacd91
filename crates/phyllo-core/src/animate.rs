//! Continuous parameter drivers. They only mutate parameter records; the
//! resulting changes reach the points through the normal diff.

use crate::constants::{POINTS_ADDED_PER_SEC, TURN_STEP_PER_TICK};
use std::time::Duration;

/// Host time context a field is ticked in.
///
/// Live updates only happen while the simulation is running and time has
/// advanced past zero, mirroring an editor that is in play mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimTime {
    pub running: bool,
    pub elapsed: Duration,
}

impl SimTime {
    pub fn running(elapsed: Duration) -> Self {
        Self {
            running: true,
            elapsed,
        }
    }

    pub fn stopped() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.running && !self.elapsed.is_zero()
    }
}

/// Adds a fixed step to a turn fraction every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnAnimator {
    pub step_per_tick: f32,
    pub enabled: bool,
}

impl Default for TurnAnimator {
    fn default() -> Self {
        Self {
            step_per_tick: TURN_STEP_PER_TICK,
            enabled: false,
        }
    }
}

impl TurnAnimator {
    pub fn new(step_per_tick: f32) -> Self {
        Self {
            step_per_tick,
            enabled: true,
        }
    }

    pub fn advance(&self, turn_fraction: &mut f32) {
        if self.enabled {
            *turn_fraction += self.step_per_tick;
        }
    }
}

/// Grows a point count by one every `interval` of accumulated tick time.
#[derive(Clone, Debug)]
pub struct PointAdder {
    pub interval: Duration,
    pub enabled: bool,
    accum: Duration,
}

impl Default for PointAdder {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1) / POINTS_ADDED_PER_SEC,
            enabled: false,
            accum: Duration::ZERO,
        }
    }
}

impl PointAdder {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            enabled: true,
            accum: Duration::ZERO,
        }
    }

    /// Advances the timer by `dt`; returns how many points were added.
    pub fn tick(&mut self, dt: Duration, point_count: &mut usize) -> usize {
        if !self.enabled || self.interval.is_zero() {
            return 0;
        }
        self.accum += dt;
        let mut added = 0;
        while self.accum >= self.interval {
            self.accum -= self.interval;
            *point_count += 1;
            added += 1;
        }
        added
    }
}
