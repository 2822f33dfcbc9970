use crate::Error;
use crate::Point;
use crate::Result;
use rand::rngs::SmallRng;

/// Where the centroids start.
#[derive(Debug, Clone, PartialEq)]
pub enum Seeding {
    /// `k` distinct observations sampled uniformly without replacement.
    Points(usize),
    /// Fixed starting centroids, already in whitened units.
    Matrix(Vec<Point>),
}

impl Seeding {
    pub fn k(&self) -> usize {
        match self {
            Self::Points(k) => *k,
            Self::Matrix(kmeans) => kmeans.len(),
        }
    }
    /// Requires at least one observation and `1 <= k <= n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        match self.k() {
            _ if n == 0 => Err(Error::insufficient_data(1, 0)),
            k if k < 1 || k > n => Err(Error::invalid_cluster_count(k, n)),
            _ => Ok(()),
        }
    }
    /// Initial centroids. Callers validate against `points.len()` first.
    pub fn init(&self, points: &[Point], rng: &mut SmallRng) -> Vec<Point> {
        match self {
            Self::Matrix(kmeans) => kmeans.clone(),
            Self::Points(k) => rand::seq::index::sample(rng, points.len(), *k)
                .into_iter()
                .map(|i| points[i])
                .collect(),
        }
    }
}
