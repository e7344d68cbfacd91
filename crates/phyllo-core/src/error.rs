use thiserror::Error;

/// Failures raised while validating a parameter set or querying a point.
///
/// A bad parameter always invalidates the whole configuration; no point is
/// ever computed from a partially valid set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("index {index} out of range for {count} points")]
    OutOfRangeIndex { index: usize, count: usize },
}

impl DistributionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DistributionError>;

pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::invalid(name, format!("{value} is not finite")))
    }
}

pub(crate) fn check_index(index: usize, count: usize) -> Result<()> {
    if index < count {
        Ok(())
    } else {
        Err(DistributionError::OutOfRangeIndex { index, count })
    }
}
