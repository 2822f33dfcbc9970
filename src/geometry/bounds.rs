use super::Feature;
use super::Features;
use crate::Measure;
use serde::Deserialize;
use serde::Serialize;

/// Open interval on one feature. Either side may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: Option<Measure>,
    pub upper: Option<Measure>,
}

impl Interval {
    pub fn new(lower: Option<Measure>, upper: Option<Measure>) -> Self {
        Self { lower, upper }
    }
    /// Strict on both sides; an unset side admits everything.
    pub fn contains(&self, x: Measure) -> bool {
        self.lower.map_or(true, |lo| x > lo) && self.upper.map_or(true, |hi| x < hi)
    }
}

/// Geometric window applied to the dataset before clustering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub distance: Interval,
    pub angle: Interval,
    pub torsion: Interval,
}

impl Bounds {
    pub fn get(&self, feature: Feature) -> &Interval {
        match feature {
            Feature::Distance => &self.distance,
            Feature::Angle => &self.angle,
            Feature::Torsion => &self.torsion,
        }
    }
    fn get_mut(&mut self, feature: Feature) -> &mut Interval {
        match feature {
            Feature::Distance => &mut self.distance,
            Feature::Angle => &mut self.angle,
            Feature::Torsion => &mut self.torsion,
        }
    }

    /// Whether a row lies strictly inside every configured interval.
    pub fn admits(&self, features: &Features, i: usize) -> bool {
        let row = features.row(i);
        Feature::all()
            .into_iter()
            .all(|f| self.get(f).contains(row.get(f)))
    }

    /// Filter rows pass by pass: distance lower, distance upper, angle
    /// lower, and so on. An unset side is resolved to the extreme of the
    /// rows that reach its pass, so it never excludes anything.
    ///
    /// Returns the surviving rows and the fully resolved bounds.
    pub fn filter(&self, mut features: Features) -> (Features, Bounds) {
        let mut resolved = *self;
        for feature in Feature::all() {
            let interval = *self.get(feature);
            match interval.lower {
                None => resolved.get_mut(feature).lower = features.min(feature),
                Some(lo) => {
                    features.retain(|o| o.get(feature) > lo);
                }
            }
            match interval.upper {
                None => resolved.get_mut(feature).upper = features.max(feature),
                Some(hi) => {
                    features.retain(|o| o.get(feature) < hi);
                }
            }
            log::debug!("{:<32}{:<32}", format!("rows within {} bounds", feature), features.len());
        }
        log::info!("{:<32}{:<32}", "rows within bounds", features.len());
        (features, resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Observation;

    fn scenario() -> Features {
        vec![
            Observation::new(2.8, 170., 10.),
            Observation::new(2.85, 168., 12.),
            Observation::new(3.5, 150., 190.),
            Observation::new(3.55, 148., 192.),
        ]
        .into()
    }

    #[test]
    fn unset_bounds_keep_everything() {
        let (features, resolved) = Bounds::default().filter(scenario());
        assert_eq!(features, scenario());
        assert_eq!(resolved.distance, Interval::new(Some(2.8), Some(3.55)));
        assert_eq!(resolved.angle, Interval::new(Some(148.), Some(170.)));
        assert_eq!(resolved.torsion, Interval::new(Some(10.), Some(192.)));
    }

    #[test]
    fn lower_distance_bound_keeps_far_pair() {
        let bounds = Bounds {
            distance: Interval::new(Some(3.0), None),
            ..Bounds::default()
        };
        let (features, resolved) = bounds.filter(scenario());
        assert_eq!(features.distance(), &[3.5, 3.55]);
        assert_eq!(features.torsion(), &[190., 192.]);
        assert_eq!(resolved.distance, Interval::new(Some(3.0), Some(3.55)));
        assert_eq!(resolved.angle.lower, Some(148.));
    }

    #[test]
    fn boundary_values_are_excluded() {
        let bounds = Bounds {
            angle: Interval::new(Some(148.), Some(170.)),
            ..Bounds::default()
        };
        let (features, _) = bounds.filter(scenario());
        assert_eq!(features.angle(), &[168., 150.]);
    }

    #[test]
    fn survivors_satisfy_every_bound() {
        let bounds = Bounds {
            distance: Interval::new(Some(2.82), Some(3.52)),
            angle: Interval::new(None, Some(169.)),
            torsion: Interval::new(Some(0.), None),
        };
        let (features, _) = bounds.filter(scenario());
        assert_eq!(features.len(), 2);
        assert!((0..features.len()).all(|i| bounds.admits(&features, i)));
    }

    #[test]
    fn everything_filtered_leaves_no_rows() {
        let bounds = Bounds {
            torsion: Interval::new(Some(200.), None),
            ..Bounds::default()
        };
        let (features, resolved) = bounds.filter(scenario());
        assert!(features.is_empty());
        assert_eq!(resolved.torsion.upper, None);
    }
}
