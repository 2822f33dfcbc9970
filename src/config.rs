//! Run configuration passed explicitly into the pipeline.
use crate::Bounds;
use crate::Interval;
use crate::KMEANS_CLUSTERS;
use crate::KMEANS_ITERATIONS;
use crate::KMEANS_SEED;
use crate::Measure;
use crate::Shift;
use crate::Whitening;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Everything a run needs besides the data and the kernel store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub d_bounds: Interval,
    pub a_bounds: Interval,
    pub t_bounds: Interval,
    pub torsion_shift: Option<Measure>,
    /// Count both directions of each contact.
    pub symmetric: bool,
    /// Cluster count when no bond type is given.
    pub k: usize,
    /// Seed the centroids from this bond type's kernels instead.
    pub bond_type: Option<String>,
    /// Use redundancy weights for means and centroid updates.
    pub weighted: bool,
    pub seed: u64,
    pub iterations: usize,
    pub whitening: Whitening,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            d_bounds: Interval::default(),
            a_bounds: Interval::default(),
            t_bounds: Interval::default(),
            torsion_shift: None,
            symmetric: false,
            k: KMEANS_CLUSTERS,
            bond_type: None,
            weighted: false,
            seed: KMEANS_SEED,
            iterations: KMEANS_ITERATIONS,
            whitening: Whitening::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }
    pub fn bounds(&self) -> Bounds {
        Bounds {
            distance: self.d_bounds,
            angle: self.a_bounds,
            torsion: self.t_bounds,
        }
    }
    pub fn shift(&self) -> Option<Shift> {
        self.torsion_shift.map(Shift::from)
    }
}
