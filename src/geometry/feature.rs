use serde::Deserialize;
use serde::Serialize;

/// One of the three geometric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Distance,
    Angle,
    Torsion,
}

impl Feature {
    /// Column order used by points, kernels, and reports.
    pub const fn all() -> [Self; 3] {
        [Self::Distance, Self::Angle, Self::Torsion]
    }
    /// Position within a [`crate::Point`].
    pub const fn index(&self) -> usize {
        match self {
            Self::Distance => 0,
            Self::Angle => 1,
            Self::Torsion => 2,
        }
    }
    /// Axis label used in plots.
    pub const fn axis(&self) -> &'static str {
        match self {
            Self::Distance => "D, Å",
            Self::Angle => "α, °",
            Self::Torsion => "φ, °",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Distance => f.pad("distance"),
            Self::Angle => f.pad("angle"),
            Self::Torsion => f.pad("torsion"),
        }
    }
}
