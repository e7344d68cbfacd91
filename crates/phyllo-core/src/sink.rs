//! The only boundary between the core and a host: something that can
//! materialize, move, recolor and remove visual points.

use glam::Vec3;

/// Host-side point lifecycle. The core issues these calls and never renders.
pub trait PointSink {
    type Handle;

    fn create(&mut self, index: usize) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
    fn set_position(&mut self, handle: &Self::Handle, position: Vec3);
    fn set_highlighted(&mut self, handle: &Self::Handle, highlighted: bool);
}

/// One recorded sink call, handle ids as issued by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    Create { index: usize, handle: u32 },
    Destroy { handle: u32 },
    SetPosition { handle: u32, position: Vec3 },
    SetHighlighted { handle: u32, highlighted: bool },
}

/// Headless sink that logs every call. Handles are sequential ids.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
    next_handle: u32,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calls recorded so far and starts a fresh log.
    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn count_creates(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Create { .. }))
            .count()
    }

    pub fn count_destroys(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Destroy { .. }))
            .count()
    }

    pub fn count_positions(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::SetPosition { .. }))
            .count()
    }

    pub fn count_highlights(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SinkCall::SetHighlighted { .. }))
            .count()
    }
}

impl PointSink for RecordingSink {
    type Handle = u32;

    fn create(&mut self, index: usize) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.calls.push(SinkCall::Create { index, handle });
        handle
    }

    fn destroy(&mut self, handle: u32) {
        self.calls.push(SinkCall::Destroy { handle });
    }

    fn set_position(&mut self, handle: &u32, position: Vec3) {
        self.calls.push(SinkCall::SetPosition {
            handle: *handle,
            position,
        });
    }

    fn set_highlighted(&mut self, handle: &u32, highlighted: bool) {
        self.calls.push(SinkCall::SetHighlighted {
            handle: *handle,
            highlighted,
        });
    }
}
