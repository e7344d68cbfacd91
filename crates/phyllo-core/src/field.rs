//! Point-field front-end: owns the points, drives a [`PointSink`], and keeps
//! them in step with a parameter record tick by tick.

use crate::animate::SimTime;
use crate::circle::{CircleConfig, CircleParams};
use crate::constants::*;
use crate::error::Result;
use crate::highlight::Highlight;
use crate::sink::PointSink;
use crate::sphere::{Basis, SphereConfig, SphereParams};
use crate::sync::{diff, ActionList, Snapshot, SyncAction, SyncPolicy};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Adapts a distributor to the front-end.
pub trait Layout: Sized {
    type Config;

    /// Validates a parameter record.
    fn from_config(config: &Self::Config) -> Result<Self>;

    fn snapshot(&self) -> Snapshot;

    /// World position of point `index`; must accept every `index < point_count`.
    fn place(&self, index: usize) -> Result<Vec3>;

    fn highlight(&self) -> Option<Highlight>;

    /// Filter applied once while populating. Keeps everything by default.
    fn keep_on_init(&self, _index: usize, _position: Vec3) -> bool {
        true
    }

    fn is_highlighted(&self, index: usize) -> bool {
        self.highlight().is_some_and(|h| h.classify(index))
    }
}

impl Layout for CircleParams {
    type Config = CircleConfig;

    fn from_config(config: &CircleConfig) -> Result<Self> {
        CircleParams::new(config)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            point_count: self.point_count(),
            turn_fraction: self.turn_fraction(),
            bias: self.distance_exponent(),
            highlight: Some(CircleParams::highlight(self)),
        }
    }

    fn place(&self, index: usize) -> Result<Vec3> {
        Ok(self.position(index)?.extend(0.0))
    }

    fn highlight(&self) -> Option<Highlight> {
        Some(CircleParams::highlight(self))
    }
}

/// Sphere parameters plus what the visual front-end adds on top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereFieldConfig {
    pub sphere: SphereConfig,
    pub basis: Basis,
    /// Zero disables highlighting.
    pub highlight_period: u32,
    pub highlight_offset: u32,
}

#[derive(Clone, Debug)]
pub struct SphereLayout {
    pub params: SphereParams,
    pub basis: Basis,
    pub highlight: Option<Highlight>,
}

impl SphereLayout {
    /// Uniform scale of a plain sphere marker for this layout.
    pub fn point_scale(&self) -> f32 {
        point_scale(self.params.view_radius())
    }
}

impl Layout for SphereLayout {
    type Config = SphereFieldConfig;

    fn from_config(config: &SphereFieldConfig) -> Result<Self> {
        Ok(Self {
            params: SphereParams::new(&config.sphere)?,
            basis: config.basis,
            highlight: Highlight::optional(config.highlight_period, config.highlight_offset),
        })
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            point_count: self.params.point_count(),
            turn_fraction: self.params.turn_fraction(),
            bias: self.params.distance_bias(),
            highlight: self.highlight,
        }
    }

    fn place(&self, index: usize) -> Result<Vec3> {
        self.params.direction(index, &self.basis)
    }

    fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    fn keep_on_init(&self, _index: usize, position: Vec3) -> bool {
        self.params.within_view(position, &self.basis)
    }
}

/// A live visual point. `index` is its slot in the distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<H> {
    pub index: usize,
    pub handle: H,
    pub position: Vec3,
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Initializing,
    Live(Snapshot),
}

/// Owns a set of points and keeps them matched to a layout's parameters.
///
/// Points are kept sorted by index. Growth appends at the tail and shrinking
/// removes from the tail, so surviving points keep their handles.
pub struct PointField<L: Layout, S: PointSink> {
    sink: S,
    points: Vec<Point<S::Handle>>,
    phase: Phase,
    policy: SyncPolicy,
    _layout: PhantomData<fn() -> L>,
}

pub type CircleField<S> = PointField<CircleParams, S>;
pub type SphereField<S> = PointField<SphereLayout, S>;

impl<L: Layout, S: PointSink> PointField<L, S> {
    pub fn new(sink: S) -> Self {
        Self::with_policy(sink, SyncPolicy::default())
    }

    pub fn with_policy(sink: S, policy: SyncPolicy) -> Self {
        Self {
            sink,
            points: Vec::new(),
            phase: Phase::Initializing,
            policy,
            _layout: PhantomData,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_live(&self) -> bool {
        matches!(self.phase, Phase::Live(_))
    }

    pub fn points(&self) -> &[Point<S::Handle>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Populates every point from scratch and goes live.
    ///
    /// On a live field this first destroys all existing points, which is the
    /// way to re-apply the one-shot init filter after parameters changed.
    /// The config is validated before anything is touched.
    pub fn initialize(&mut self, config: &L::Config) -> Result<usize> {
        let layout = L::from_config(config)?;
        let snapshot = layout.snapshot();

        if !self.points.is_empty() {
            log::info!("[field] rebuilding {} points", self.points.len());
            self.truncate(0);
        }

        for index in 0..snapshot.point_count {
            let position = layout.place(index)?;
            if !layout.keep_on_init(index, position) {
                continue;
            }
            self.spawn(&layout, index, position);
        }

        log::info!(
            "[field] initialized {}/{} points (turn={:.5} bias={:.3})",
            self.points.len(),
            snapshot.point_count,
            snapshot.turn_fraction,
            snapshot.bias
        );
        self.phase = Phase::Live(snapshot);
        Ok(self.points.len())
    }

    /// Brings the points in line with `config`.
    ///
    /// Does nothing before [`PointField::initialize`] or while `time` is not
    /// active. An invalid config is rejected without touching any point.
    pub fn tick(&mut self, config: &L::Config, time: SimTime) -> Result<ActionList> {
        let previous = match self.phase {
            Phase::Live(snapshot) if time.is_active() => snapshot,
            _ => return Ok(ActionList::new()),
        };

        let layout = L::from_config(config)?;
        let (actions, next) = diff(&previous, &layout.snapshot(), self.policy);
        for action in &actions {
            self.apply(&layout, *action)?;
        }
        self.phase = Phase::Live(next);
        Ok(actions)
    }

    fn apply(&mut self, layout: &L, action: SyncAction) -> Result<()> {
        match action {
            SyncAction::Shrink { to, .. } => self.truncate(to),
            SyncAction::RepositionAll => {
                for point in &mut self.points {
                    point.position = layout.place(point.index)?;
                    self.sink.set_position(&point.handle, point.position);
                }
            }
            SyncAction::Grow { from, to } => {
                for index in from..to {
                    let position = layout.place(index)?;
                    self.spawn(layout, index, position);
                }
            }
            SyncAction::RehighlightAll => {
                for point in &mut self.points {
                    point.highlighted = layout.is_highlighted(point.index);
                    self.sink.set_highlighted(&point.handle, point.highlighted);
                }
            }
        }
        Ok(())
    }

    fn spawn(&mut self, layout: &L, index: usize, position: Vec3) {
        let handle = self.sink.create(index);
        let highlighted = layout.is_highlighted(index);
        self.sink.set_position(&handle, position);
        self.sink.set_highlighted(&handle, highlighted);
        self.points.push(Point {
            index,
            handle,
            position,
            highlighted,
        });
    }

    /// Destroys every point with `index >= len`, tail first.
    fn truncate(&mut self, len: usize) {
        while self.points.last().is_some_and(|p| p.index >= len) {
            if let Some(point) = self.points.pop() {
                self.sink.destroy(point.handle);
            }
        }
    }
}
