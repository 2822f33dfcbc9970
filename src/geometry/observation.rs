use super::Feature;
use crate::Measure;
use crate::Point;
use crate::Weight;
use serde::Deserialize;
use serde::Serialize;

/// A single directional contact measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub distance: Measure,
    pub angle: Measure,
    pub torsion: Measure,
    pub weight: Weight,
}

impl Observation {
    /// Unit-weight observation.
    pub fn new(distance: Measure, angle: Measure, torsion: Measure) -> Self {
        Self {
            distance,
            angle,
            torsion,
            weight: 1.,
        }
    }
    pub fn weighted(self, weight: Weight) -> Self {
        Self { weight, ..self }
    }
    pub fn get(&self, feature: Feature) -> Measure {
        match feature {
            Feature::Distance => self.distance,
            Feature::Angle => self.angle,
            Feature::Torsion => self.torsion,
        }
    }
    pub fn point(&self) -> Point {
        [self.distance, self.angle, self.torsion]
    }
    /// Geometry is finite and the weight is a usable redundancy count.
    pub fn is_finite(&self) -> bool {
        self.point().iter().all(|x| x.is_finite())
            && self.weight.is_finite()
            && self.weight >= 0.
    }
}
