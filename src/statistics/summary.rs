use super::Moments;
use crate::Assignment;
use crate::Feature;
use crate::Features;
use crate::Label;
use crate::Measure;
use serde::Deserialize;
use serde::Serialize;

/// Statistics of one cluster over the raw (unwhitened) features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub cluster: Label,
    pub distance: Moments,
    pub angle: Moments,
    pub torsion: Moments,
    /// Share of the dataset in this cluster, in percent.
    pub population: Measure,
}

impl Summary {
    pub fn get(&self, feature: Feature) -> &Moments {
        match feature {
            Feature::Distance => &self.distance,
            Feature::Angle => &self.angle,
            Feature::Torsion => &self.torsion,
        }
    }
    /// Cluster location as a raw point.
    pub fn center(&self) -> crate::Point {
        [self.distance.mean, self.angle.mean, self.torsion.mean]
    }
    /// Kernel row: (mean, 2σ²) for distance, angle, and torsion in turn.
    /// Positions 0, 2, 4 are the location, so the row can seed a later run.
    pub fn kernel(&self) -> [Measure; 6] {
        let [d, a, t] = Feature::all().map(|f| *self.get(f));
        [
            d.mean,
            d.dispersion(),
            a.mean,
            a.dispersion(),
            t.mean,
            t.dispersion(),
        ]
    }

    /// One summary per cluster id, in id order.
    ///
    /// Unweighted runs count rows; weighted runs use redundancy-weighted
    /// means and weight shares. Empty clusters report NaN moments and a
    /// zero population.
    pub fn summarize(features: &Features, assignment: &Assignment, weighted: bool) -> Vec<Self> {
        debug_assert!(features.len() == assignment.len());
        let mass = |rows: &Features| match weighted {
            true => rows.weight().iter().sum::<Measure>(),
            false => rows.len() as Measure,
        };
        let total = mass(features);
        (0..assignment.k())
            .map(|j| {
                let ref members = features.members(assignment.labels(), j);
                let moments = |f: Feature| match weighted {
                    true => Moments::weighted(members.column(f), members.weight()),
                    false => Moments::of(members.column(f)),
                };
                Self {
                    cluster: j,
                    distance: moments(Feature::Distance),
                    angle: moments(Feature::Angle),
                    torsion: moments(Feature::Torsion),
                    population: 100. * mass(members) / total,
                }
            })
            .collect()
    }
}

/// Two lines per cluster: the statistics row, then the kernel row.
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cluster #{:<2}: ", self.cluster + 1)?;
        for feature in Feature::all() {
            let m = self.get(feature);
            write!(f, "{:8.3} {:8.3} ", m.mean, m.spread)?;
        }
        writeln!(f, "{:5.1}%", self.population)?;
        write!(
            f,
            "{:15}({})",
            "",
            self.kernel()
                .iter()
                .map(|x| format!("{:.3}", x))
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}
