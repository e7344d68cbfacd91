use fnv::FnvHashMap;
use glam::Vec3;
use phyllo_core::PointSink;

#[derive(Clone, Debug, Default)]
pub struct PointRecord {
    pub index: usize,
    pub position: Vec3,
    pub highlighted: bool,
}

/// Keeps the last known state of every point and traces each call.
pub struct LogSink {
    label: &'static str,
    points: FnvHashMap<u32, PointRecord>,
    next_handle: u32,
    pub calls: u64,
}

impl LogSink {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            points: FnvHashMap::default(),
            next_handle: 0,
            calls: 0,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn highlighted(&self) -> usize {
        self.points.values().filter(|p| p.highlighted).count()
    }

    /// Largest distance of any point from the origin.
    pub fn extent(&self) -> f32 {
        self.points
            .values()
            .map(|p| p.position.length())
            .fold(0.0, f32::max)
    }
}

impl PointSink for LogSink {
    type Handle = u32;

    fn create(&mut self, index: usize) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.calls += 1;
        self.points.insert(
            handle,
            PointRecord {
                index,
                ..Default::default()
            },
        );
        log::trace!("[{}] create #{} -> {}", self.label, index, handle);
        handle
    }

    fn destroy(&mut self, handle: u32) {
        self.calls += 1;
        if let Some(p) = self.points.remove(&handle) {
            log::trace!("[{}] destroy #{} ({})", self.label, p.index, handle);
        }
    }

    fn set_position(&mut self, handle: &u32, position: Vec3) {
        self.calls += 1;
        if let Some(p) = self.points.get_mut(handle) {
            p.position = position;
        }
    }

    fn set_highlighted(&mut self, handle: &u32, highlighted: bool) {
        self.calls += 1;
        if let Some(p) = self.points.get_mut(handle) {
            p.highlighted = highlighted;
        }
    }
}
