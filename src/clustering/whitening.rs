use crate::Error;
use crate::Feature;
use crate::Measure;
use crate::Point;
use crate::Result;
use crate::statistics::mad;
use serde::Deserialize;
use serde::Serialize;

/// How each feature's scale is estimated before clustering.
///
/// Distances are in Å while angles and torsions are in degrees, so
/// Euclidean distance is only meaningful once every column has been
/// divided by its own scale. Columns are not centred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Whitening {
    /// Population standard deviation; the result has unit variance.
    #[default]
    Deviation,
    /// Normal-consistent median absolute deviation.
    Median,
}

impl Whitening {
    /// Scale estimate of a single column.
    pub fn scale(&self, column: &[Measure]) -> Measure {
        match self {
            Self::Median => mad(column),
            Self::Deviation => {
                let n = column.len() as Measure;
                let mean = column.iter().sum::<Measure>() / n;
                let variance = column.iter().map(|x| (x - mean) * (x - mean)).sum::<Measure>() / n;
                variance.sqrt()
            }
        }
    }

    /// Fit per-feature scales. Needs two rows and a positive,
    /// finite scale in every column.
    pub fn fit(&self, points: &[Point]) -> Result<Scaler> {
        if points.len() < 2 {
            return Err(Error::insufficient_data(2, points.len()));
        }
        let mut scales = [0.; 3];
        for feature in Feature::all() {
            let i = feature.index();
            let ref column = points.iter().map(|p| p[i]).collect::<Vec<Measure>>();
            let constant = column.iter().all(|x| *x == column[0]);
            let scale = self.scale(column);
            if constant || !scale.is_finite() || scale <= 0. {
                return Err(Error::DegenerateFeature(feature));
            }
            scales[i] = scale;
        }
        log::debug!("{:<32}{:<32}", "whitening scales", format!("{:.3?}", scales));
        Ok(Scaler(scales))
    }
}

/// Fitted per-feature scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler(Point);

impl Scaler {
    pub fn scales(&self) -> &Point {
        &self.0
    }
    pub fn whiten(&self, point: &Point) -> Point {
        std::array::from_fn(|i| point[i] / self.0[i])
    }
    pub fn transform(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.whiten(p)).collect()
    }
}
