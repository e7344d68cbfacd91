//! Golden-angle spiral on a disc.
//!
//! Point `i` of `n` starts at `i / n` along the reference axis, is rotated by
//! `turn_fraction * i` turns, and then has its distance from the anchor
//! remapped by `distance^distance_exponent`. Index 0 is always the anchor.

use crate::constants::*;
use crate::error::{check_index, require_finite, DistributionError, Result};
use crate::highlight::Highlight;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Plain circle parameter record as supplied by a driver (inspector, file, test).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub point_count: usize,
    pub turn_fraction: f32,
    pub radius: f32,
    pub distance_exponent: f32,
    pub highlight_period: u32,
    pub highlight_offset: u32,
    pub center: Vec2,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            point_count: CIRCLE_POINT_COUNT,
            turn_fraction: CIRCLE_TURN_FRACTION,
            radius: CIRCLE_RADIUS,
            distance_exponent: CIRCLE_DISTANCE_EXPONENT,
            highlight_period: CIRCLE_HIGHLIGHT_PERIOD,
            highlight_offset: CIRCLE_HIGHLIGHT_OFFSET,
            center: Vec2::ZERO,
        }
    }
}

/// Validated circle parameters. Construct with [`CircleParams::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct CircleParams {
    point_count: usize,
    turn_fraction: f32,
    radius: f32,
    distance_exponent: f32,
    highlight: Highlight,
    center: Vec2,
}

impl CircleParams {
    /// Validates `config`. An exponent below [`MIN_DISTANCE_EXPONENT`] is
    /// clamped rather than rejected.
    pub fn new(config: &CircleConfig) -> Result<Self> {
        if config.point_count < 1 {
            return Err(DistributionError::invalid(
                "point_count",
                "must be at least 1",
            ));
        }
        require_finite("turn_fraction", config.turn_fraction)?;
        require_finite("radius", config.radius)?;
        require_finite("distance_exponent", config.distance_exponent)?;
        require_finite("center.x", config.center.x)?;
        require_finite("center.y", config.center.y)?;
        if config.radius <= 0.0 {
            return Err(DistributionError::invalid(
                "radius",
                format!("{} must be positive", config.radius),
            ));
        }
        let highlight = Highlight::new(config.highlight_period, config.highlight_offset)?;

        Ok(Self {
            point_count: config.point_count,
            turn_fraction: config.turn_fraction,
            radius: config.radius,
            distance_exponent: clamp_exponent(config.distance_exponent),
            highlight,
            center: config.center,
        })
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn turn_fraction(&self) -> f32 {
        self.turn_fraction
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The exponent actually used, after clamping.
    pub fn distance_exponent(&self) -> f32 {
        self.distance_exponent
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Position of point `index` on the disc.
    pub fn position(&self, index: usize) -> Result<Vec2> {
        check_index(index, self.point_count)?;
        Ok(self.point_at(index))
    }

    /// All positions in index order.
    pub fn positions(&self) -> Vec<Vec2> {
        (0..self.point_count).map(|i| self.point_at(i)).collect()
    }

    fn point_at(&self, index: usize) -> Vec2 {
        if index == 0 {
            return self.center;
        }

        let t = index as f32 / self.point_count as f32;
        // Whole turns are dropped before scaling so an extra full turn is exact
        let turns = (self.turn_fraction * index as f32).rem_euclid(1.0);
        let raw = Vec2::from_angle(turns * TAU).rotate(Vec2::new(t, 0.0));

        let magnitude = raw.length().powf(self.distance_exponent);
        self.center + magnitude * self.radius * raw.normalize()
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.classify(index)
    }
}

fn clamp_exponent(exponent: f32) -> f32 {
    if exponent < MIN_DISTANCE_EXPONENT {
        log::debug!(
            "[circle] distance_exponent {:.3} clamped to {:.1}",
            exponent,
            MIN_DISTANCE_EXPONENT
        );
        MIN_DISTANCE_EXPONENT
    } else {
        exponent
    }
}
