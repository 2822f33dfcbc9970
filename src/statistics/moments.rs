use super::Quartiles;
use crate::Measure;
use crate::Weight;
use serde::Deserialize;
use serde::Serialize;

/// Location and robust spread of one feature within one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: Measure,
    pub spread: Measure,
}

impl Moments {
    /// Unweighted mean and IQR spread. Empty samples yield NaN for both;
    /// a single value has zero spread.
    pub fn of(sample: &[Measure]) -> Self {
        Self {
            mean: sample.iter().sum::<Measure>() / sample.len() as Measure,
            spread: Quartiles::from(sample).spread(),
        }
    }
    /// Redundancy-weighted mean Σ(w·v)/Σw. Spread stays unweighted.
    pub fn weighted(sample: &[Measure], weights: &[Weight]) -> Self {
        let total = weights.iter().sum::<Weight>();
        let moment = sample
            .iter()
            .zip(weights.iter())
            .map(|(v, w)| v * w)
            .sum::<Measure>();
        Self {
            mean: moment / total,
            spread: Quartiles::from(sample).spread(),
        }
    }
    /// Kernel dispersion parameter, 2σ².
    pub fn dispersion(&self) -> Measure {
        2. * self.spread * self.spread
    }
}
