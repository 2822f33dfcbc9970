use crate::Label;
use serde::Deserialize;
use serde::Serialize;

/// Cluster label for each observation, fixed once clustering finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    labels: Vec<Label>,
    k: usize,
}

impl Assignment {
    pub fn new(labels: Vec<Label>, k: usize) -> Self {
        debug_assert!(labels.iter().all(|j| *j < k));
        Self { labels, k }
    }
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// Number of observations per cluster id.
    pub fn counts(&self) -> Vec<usize> {
        self.labels
            .iter()
            .fold(vec![0; self.k], |mut counts, j| {
                counts[*j] += 1;
                counts
            })
    }
    /// Number of clusters holding at least one observation.
    pub fn distinct(&self) -> usize {
        self.counts().iter().filter(|n| **n > 0).count()
    }
}
