//! Periodic highlight classification shared by the circle and sphere fields.

use crate::error::{DistributionError, Result};

/// True when `index` falls on the highlight grid: `(index + offset) % period == 0`.
///
/// Independent of where the point is placed. A zero period marks nothing,
/// matching [`Highlight::optional`].
#[inline]
pub fn highlight_class(index: usize, period: u32, offset: u32) -> bool {
    if period == 0 {
        return false;
    }
    (index as u64 + offset as u64) % period as u64 == 0
}

/// A validated `(period, offset)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    period: u32,
    offset: u32,
}

impl Highlight {
    pub fn new(period: u32, offset: u32) -> Result<Self> {
        if period == 0 {
            return Err(DistributionError::invalid(
                "highlight_period",
                "must be at least 1",
            ));
        }
        Ok(Self { period, offset })
    }

    /// Treats a zero period as "highlighting disabled".
    pub fn optional(period: u32, offset: u32) -> Option<Self> {
        (period != 0).then_some(Self { period, offset })
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn classify(&self, index: usize) -> bool {
        highlight_class(index, self.period, self.offset)
    }
}
