//! Biased phyllotaxis spiral on a sphere, seen from an emitting frame.
//!
//! Point 0 sits on the `forward` axis at `view_radius`. Every other point is
//! swung away from `forward` by a biased fraction of a half turn about `right`,
//! then spun about `forward` by `turn_fraction * index` turns.

use crate::constants::*;
use crate::error::{check_index, require_finite, DistributionError, Result};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Plain sphere parameter record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub point_count: usize,
    pub distance_bias: f32,
    pub view_angle_degrees: f32,
    pub view_radius: f32,
    pub turn_fraction: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            point_count: SPHERE_POINT_COUNT,
            distance_bias: SPHERE_DISTANCE_BIAS,
            view_angle_degrees: SPHERE_VIEW_ANGLE_DEGREES,
            view_radius: SPHERE_VIEW_RADIUS,
            turn_fraction: SPHERE_TURN_FRACTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct BasisVectors {
    forward: Vec3,
    right: Vec3,
}

/// Orthonormal `forward`/`right` pair of the emitting frame.
///
/// Both vectors must be non-zero and not parallel. `forward` is normalized
/// and `right` has its `forward` component removed before normalizing, so
/// a half turn about `right` always carries `forward` onto its antipode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BasisVectors", into = "BasisVectors")]
pub struct Basis {
    forward: Vec3,
    right: Vec3,
}

impl Basis {
    pub fn new(forward: Vec3, right: Vec3) -> Result<Self> {
        let forward = forward
            .try_normalize()
            .ok_or_else(|| DistributionError::invalid("forward", "must be a finite non-zero vector"))?;
        let right = right
            .try_normalize()
            .ok_or_else(|| DistributionError::invalid("right", "must be a finite non-zero vector"))?;
        if forward.cross(right).length_squared() < 1e-6 {
            return Err(DistributionError::invalid(
                "right",
                "must not be parallel to forward",
            ));
        }
        let right = (right - forward * forward.dot(right))
            .try_normalize()
            .ok_or_else(|| DistributionError::invalid("right", "must not be parallel to forward"))?;
        Ok(Self { forward, right })
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self {
            forward: DEFAULT_FORWARD,
            right: DEFAULT_RIGHT,
        }
    }
}

impl TryFrom<BasisVectors> for Basis {
    type Error = DistributionError;

    fn try_from(v: BasisVectors) -> Result<Self> {
        Basis::new(v.forward, v.right)
    }
}

impl From<Basis> for BasisVectors {
    fn from(b: Basis) -> Self {
        Self {
            forward: b.forward,
            right: b.right,
        }
    }
}

/// Remaps a linear fraction `u` in \[0, 1\] to a polar fraction.
///
/// A zero bias is the identity. Otherwise the exponent slides from `1/bias`
/// at the apex to `bias` at the antipode, which for `bias > 1` packs points
/// toward the apex.
pub fn biased_position(u: f32, bias: f32) -> f32 {
    if bias == 0.0 {
        return u;
    }
    let exponent = (1.0 / bias) + (bias - 1.0 / bias) * u;
    u.powf(exponent)
}

/// True when `direction` lies within `view_angle_degrees` of `basis.forward()`.
///
/// Angles within [`VIEW_ANGLE_TOLERANCE_DEGREES`] of the limit count as
/// inside, so a 180 degree cone keeps the antipode despite rounding.
pub fn within_view(direction: Vec3, basis: &Basis, view_angle_degrees: f32) -> bool {
    let angle = basis.forward.angle_between(direction).to_degrees();
    angle <= view_angle_degrees + VIEW_ANGLE_TOLERANCE_DEGREES
}

/// Validated sphere parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereParams {
    point_count: usize,
    distance_bias: f32,
    view_angle_degrees: f32,
    view_radius: f32,
    turn_fraction: f32,
}

impl SphereParams {
    pub fn new(config: &SphereConfig) -> Result<Self> {
        if config.point_count < 1 {
            return Err(DistributionError::invalid(
                "point_count",
                "must be at least 1",
            ));
        }
        require_finite("distance_bias", config.distance_bias)?;
        require_finite("view_angle_degrees", config.view_angle_degrees)?;
        require_finite("view_radius", config.view_radius)?;
        require_finite("turn_fraction", config.turn_fraction)?;
        if config.distance_bias < 0.0 {
            return Err(DistributionError::invalid(
                "distance_bias",
                format!("{} must not be negative", config.distance_bias),
            ));
        }
        if !(0.0..=MAX_VIEW_ANGLE_DEGREES).contains(&config.view_angle_degrees) {
            return Err(DistributionError::invalid(
                "view_angle_degrees",
                format!(
                    "{} outside [0, {MAX_VIEW_ANGLE_DEGREES}]",
                    config.view_angle_degrees
                ),
            ));
        }
        if config.view_radius <= 0.0 {
            return Err(DistributionError::invalid(
                "view_radius",
                format!("{} must be positive", config.view_radius),
            ));
        }

        Ok(Self {
            point_count: config.point_count,
            distance_bias: config.distance_bias,
            view_angle_degrees: config.view_angle_degrees,
            view_radius: config.view_radius,
            turn_fraction: config.turn_fraction,
        })
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn distance_bias(&self) -> f32 {
        self.distance_bias
    }

    pub fn view_angle_degrees(&self) -> f32 {
        self.view_angle_degrees
    }

    pub fn view_radius(&self) -> f32 {
        self.view_radius
    }

    pub fn turn_fraction(&self) -> f32 {
        self.turn_fraction
    }

    /// Direction of point `index`; its length is `view_radius`.
    pub fn direction(&self, index: usize, basis: &Basis) -> Result<Vec3> {
        check_index(index, self.point_count)?;
        Ok(self.place(index, basis))
    }

    /// Every direction, recomputed on each call.
    pub fn directions(&self, basis: &Basis) -> Vec<Vec3> {
        (0..self.point_count)
            .map(|i| self.place(i, basis))
            .collect()
    }

    pub fn within_view(&self, direction: Vec3, basis: &Basis) -> bool {
        within_view(direction, basis, self.view_angle_degrees)
    }

    pub(crate) fn place(&self, index: usize, basis: &Basis) -> Vec3 {
        let apex = self.view_radius * basis.forward;
        if index == 0 {
            return apex;
        }

        // index > 0 implies point_count >= 2
        let u = index as f32 / (self.point_count - 1) as f32;
        let polar = biased_position(u, self.distance_bias) * PI;
        let swung = Quat::from_axis_angle(basis.right, polar) * apex;

        let turns = (self.turn_fraction * index as f32).rem_euclid(1.0);
        Quat::from_axis_angle(basis.forward, turns * TAU) * swung
    }
}

/// On-demand direction source with a one-shot field-of-view cull.
///
/// The cone filter runs in [`SphereSampler::new`] only. Later calls to
/// [`SphereSampler::set_params`] keep the retained index set even when the
/// view angle or point count change; call [`SphereSampler::refilter`] to
/// derive it again.
#[derive(Clone, Debug)]
pub struct SphereSampler {
    params: SphereParams,
    basis: Basis,
    retained: Vec<usize>,
}

impl SphereSampler {
    pub fn new(params: SphereParams, basis: Basis) -> Self {
        let mut sampler = Self {
            params,
            basis,
            retained: Vec::new(),
        };
        sampler.refilter();
        sampler
    }

    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Indices that survived the last cone filter.
    pub fn retained(&self) -> &[usize] {
        &self.retained
    }

    pub fn set_params(&mut self, params: SphereParams) {
        self.params = params;
    }

    pub fn set_basis(&mut self, basis: Basis) {
        self.basis = basis;
    }

    /// Re-derives the retained set from the current parameters.
    pub fn refilter(&mut self) {
        let before = self.retained.len();
        self.retained = (0..self.params.point_count)
            .filter(|&i| {
                let dir = self.params.place(i, &self.basis);
                self.params.within_view(dir, &self.basis)
            })
            .collect();
        log::debug!(
            "[sampler] view cone {:.1} deg kept {}/{} (was {})",
            self.params.view_angle_degrees,
            self.retained.len(),
            self.params.point_count,
            before
        );
    }

    /// Current directions of the retained points. Retained indices beyond a
    /// shrunk point count are skipped.
    pub fn vectors(&self) -> Vec<Vec3> {
        self.retained
            .iter()
            .filter(|&&i| i < self.params.point_count)
            .map(|&i| self.params.place(i, &self.basis))
            .collect()
    }
}
