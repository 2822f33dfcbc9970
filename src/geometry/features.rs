use super::Feature;
use super::Observation;
use crate::Label;
use crate::Measure;
use crate::Point;
use crate::Weight;

/// Column-major table of observations.
///
/// Rows are identified by position, so every transform goes through
/// [`Features::retain`] or a per-column map that touches each column
/// at the same indices. The four columns always have equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    distance: Vec<Measure>,
    angle: Vec<Measure>,
    torsion: Vec<Measure>,
    weight: Vec<Weight>,
}

impl Features {
    pub fn len(&self) -> usize {
        self.distance.len()
    }
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }
    pub fn distance(&self) -> &[Measure] {
        &self.distance
    }
    pub fn angle(&self) -> &[Measure] {
        &self.angle
    }
    pub fn torsion(&self) -> &[Measure] {
        &self.torsion
    }
    pub fn weight(&self) -> &[Weight] {
        &self.weight
    }
    pub fn column(&self, feature: Feature) -> &[Measure] {
        match feature {
            Feature::Distance => &self.distance,
            Feature::Angle => &self.angle,
            Feature::Torsion => &self.torsion,
        }
    }
    pub(crate) fn column_mut(&mut self, feature: Feature) -> &mut [Measure] {
        match feature {
            Feature::Distance => &mut self.distance,
            Feature::Angle => &mut self.angle,
            Feature::Torsion => &mut self.torsion,
        }
    }
    pub fn row(&self, i: usize) -> Observation {
        Observation {
            distance: self.distance[i],
            angle: self.angle[i],
            torsion: self.torsion[i],
            weight: self.weight[i],
        }
    }
    pub fn rows(&self) -> impl Iterator<Item = Observation> + '_ {
        (0..self.len()).map(|i| self.row(i))
    }
    pub fn points(&self) -> Vec<Point> {
        self.rows().map(|o| o.point()).collect()
    }

    /// Smallest value of a column, if any rows remain.
    pub fn min(&self, feature: Feature) -> Option<Measure> {
        self.column(feature).iter().copied().reduce(Measure::min)
    }
    /// Largest value of a column, if any rows remain.
    pub fn max(&self, feature: Feature) -> Option<Measure> {
        self.column(feature).iter().copied().reduce(Measure::max)
    }

    /// Keep rows satisfying the predicate across all columns.
    /// Returns the number of rows dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: Fn(&Observation) -> bool,
    {
        let ref mask = self.rows().map(|o| keep(&o)).collect::<Vec<bool>>();
        let before = self.len();
        Self::mask(&mut self.distance, mask);
        Self::mask(&mut self.angle, mask);
        Self::mask(&mut self.torsion, mask);
        Self::mask(&mut self.weight, mask);
        before - self.len()
    }

    /// Drop rows carrying NaN/Inf geometry or unusable weights.
    pub fn finite(mut self) -> Self {
        let dropped = self.retain(Observation::is_finite);
        if dropped > 0 {
            log::warn!("{:<32}{:<32}", "dropped non-finite rows", dropped);
        }
        self
    }

    /// Drop rows that carry no redundancy weight.
    pub fn weighted(mut self) -> Self {
        let dropped = self.retain(|o| o.weight > 0.);
        if dropped > 0 {
            log::warn!("{:<32}{:<32}", "dropped zero-weight rows", dropped);
        }
        self
    }

    /// Rows carrying label `j`.
    pub fn members(&self, labels: &[Label], j: Label) -> Self {
        labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == j)
            .map(|(i, _)| self.row(i))
            .collect()
    }

    fn mask(column: &mut Vec<Measure>, mask: &[bool]) {
        *column = column
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(x, _)| *x)
            .collect();
    }
}

impl FromIterator<Observation> for Features {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut features = Self::default();
        for o in iter {
            features.distance.push(o.distance);
            features.angle.push(o.angle);
            features.torsion.push(o.torsion);
            features.weight.push(o.weight);
        }
        features
    }
}

impl From<Vec<Observation>> for Features {
    fn from(observations: Vec<Observation>) -> Self {
        observations.into_iter().collect()
    }
}
