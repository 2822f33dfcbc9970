use crate::Clustering;
use crate::Feature;
use crate::Label;
use crate::Measure;
use serde::Serialize;
use std::path::Path;

/// Pairwise projections of a run, ready for an external plotter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub title: String,
    pub panels: Vec<Panel>,
}

/// One x/y projection with a series per cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub x: Feature,
    pub y: Feature,
    pub xlabel: &'static str,
    pub ylabel: &'static str,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub cluster: Label,
    pub points: Vec<[Measure; 2]>,
    pub center: [Measure; 2],
}

impl Scatter {
    /// Distance–angle, distance–torsion and angle–torsion panels.
    pub fn new(title: impl Into<String>, run: &Clustering) -> Self {
        let panels = [
            (Feature::Distance, Feature::Angle),
            (Feature::Distance, Feature::Torsion),
            (Feature::Angle, Feature::Torsion),
        ]
        .into_iter()
        .map(|(x, y)| Panel::new(run, x, y))
        .collect();
        Self {
            title: title.into(),
            panels,
        }
    }
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

impl Panel {
    fn new(run: &Clustering, x: Feature, y: Feature) -> Self {
        let labels = run.assignment.labels();
        let series = run
            .summaries
            .iter()
            .map(|s| Series {
                cluster: s.cluster,
                center: [s.get(x).mean, s.get(y).mean],
                points: run
                    .features
                    .rows()
                    .zip(labels.iter())
                    .filter(|(_, j)| **j == s.cluster)
                    .map(|(o, _)| [o.get(x), o.get(y)])
                    .collect(),
            })
            .collect();
        Self {
            title: format!("{}-{}", capitalize(x), capitalize(y)),
            x,
            y,
            xlabel: x.axis(),
            ylabel: y.axis(),
            series,
        }
    }
}

fn capitalize(feature: Feature) -> String {
    let name = feature.to_string();
    let mut chars = name.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
