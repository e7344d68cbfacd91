//! Delta detection between two parameter snapshots.
//!
//! [`diff`] is pure: it looks at the previous and current snapshot and
//! returns the coarse actions a front-end must apply plus the snapshot to
//! compare against next tick. Applying the actions is the front-end's job.

use crate::highlight::Highlight;
use smallvec::SmallVec;

/// The tracked parameters of one tick.
///
/// `bias` is whatever nonlinearly remaps radial placement: the circle's
/// (clamped) distance exponent or the sphere's distance bias.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub point_count: usize,
    pub turn_fraction: f32,
    pub bias: f32,
    pub highlight: Option<Highlight>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    /// Destroy indices `to..from`, highest first.
    Shrink { from: usize, to: usize },
    /// Recompute the position of every live point.
    RepositionAll,
    /// Create indices `from..to`, placing and classifying each once.
    Grow { from: usize, to: usize },
    /// Recompute the highlight of every live point.
    RehighlightAll,
}

pub type ActionList = SmallVec<[SyncAction; 4]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncPolicy {
    /// Also reposition every point when only the point count changed. Needed
    /// where a point's placement depends on the total count and stale
    /// spacing is unwanted.
    pub reposition_on_resize: bool,
}

/// Compares `current` against `previous` and lists the work to do.
///
/// Actions come out in the order Shrink, RepositionAll, Grow, RehighlightAll
/// so no position is computed for a point about to be destroyed. The
/// returned snapshot is the new baseline.
pub fn diff(previous: &Snapshot, current: &Snapshot, policy: SyncPolicy) -> (ActionList, Snapshot) {
    let mut actions = ActionList::new();

    let placement_changed =
        current.turn_fraction != previous.turn_fraction || current.bias != previous.bias;
    let resized = current.point_count != previous.point_count;

    if current.point_count < previous.point_count {
        log::debug!(
            "[sync] point_count {} -> {}: shrink",
            previous.point_count,
            current.point_count
        );
        actions.push(SyncAction::Shrink {
            from: previous.point_count,
            to: current.point_count,
        });
    }

    if placement_changed || (resized && policy.reposition_on_resize) {
        log::debug!(
            "[sync] turn {:.5} -> {:.5}, bias {:.3} -> {:.3}: reposition all",
            previous.turn_fraction,
            current.turn_fraction,
            previous.bias,
            current.bias
        );
        actions.push(SyncAction::RepositionAll);
    }

    if current.point_count > previous.point_count {
        log::debug!(
            "[sync] point_count {} -> {}: grow",
            previous.point_count,
            current.point_count
        );
        actions.push(SyncAction::Grow {
            from: previous.point_count,
            to: current.point_count,
        });
    }

    if current.highlight != previous.highlight {
        log::debug!(
            "[sync] highlight {:?} -> {:?}: rehighlight all",
            previous.highlight,
            current.highlight
        );
        actions.push(SyncAction::RehighlightAll);
    }

    (actions, *current)
}
