use super::Feature;
use super::Features;
use crate::Measure;
use crate::TORSION_PERIOD;
use serde::Deserialize;
use serde::Serialize;

/// Moves the torsion branch cut to a chosen threshold.
///
/// Torsions are periodic, so a cluster straddling the raw 0°/360°
/// boundary shows up as two. Every torsion strictly below the
/// threshold is lifted by one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shift(Measure);

impl Shift {
    pub fn threshold(&self) -> Measure {
        self.0
    }
    pub fn apply(&self, torsion: Measure) -> Measure {
        if torsion < self.0 {
            torsion + TORSION_PERIOD
        } else {
            torsion
        }
    }
    pub fn normalize(&self, torsions: &mut [Measure]) {
        torsions.iter_mut().for_each(|t| *t = self.apply(*t));
    }
}

impl From<Measure> for Shift {
    fn from(threshold: Measure) -> Self {
        Self(threshold)
    }
}

impl Features {
    /// Apply the torsion shift, if any. Row count is unchanged.
    pub fn shift(mut self, shift: Option<Shift>) -> Self {
        if let Some(shift) = shift {
            log::debug!("{:<32}{:<32}", "shifting torsions below", shift.threshold());
            shift.normalize(self.column_mut(Feature::Torsion));
        }
        self
    }
}
