//! Error types for the clustering pipeline.
use crate::geometry::Feature;
use thiserror::Error;

/// Fatal conditions detected before the Lloyd loop begins.
///
/// Non-finite measurements are not represented here: they are
/// dropped from the dataset as soon as it is read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Too few rows survived filtering for the requested operation.
    #[error("insufficient data: required {required}, actual {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A feature has no spread, so whitening is undefined.
    #[error("degenerate feature: {0} has zero spread")]
    DegenerateFeature(Feature),

    /// Cluster count outside `[1, n]`.
    #[error("invalid cluster count: k = {k} with {n} observations")]
    InvalidClusterCount { k: usize, n: usize },

    /// Bond type missing from the kernel store.
    #[error("unknown bond type: {0}")]
    UnknownBondType(String),

    /// Kernel row too short to carry distance, angle, and torsion.
    #[error("malformed kernel: {bond} row {row} has {len} fields, need at least 5")]
    MalformedKernel { bond: String, row: usize, len: usize },
}

impl Error {
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
    pub fn invalid_cluster_count(k: usize, n: usize) -> Self {
        Self::InvalidClusterCount { k, n }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            Error::insufficient_data(2, 0).to_string(),
            "insufficient data: required 2, actual 0"
        );
        assert_eq!(
            Error::invalid_cluster_count(5, 3).to_string(),
            "invalid cluster count: k = 5 with 3 observations"
        );
        assert_eq!(
            Error::DegenerateFeature(Feature::Torsion).to_string(),
            "degenerate feature: torsion has zero spread"
        );
        assert_eq!(
            Error::UnknownBondType("NH-O".into()).to_string(),
            "unknown bond type: NH-O"
        );
    }
}
