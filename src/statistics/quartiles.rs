use crate::IQR_NORMAL_SCALE;
use crate::MAD_NORMAL_SCALE;
use crate::Measure;

/// Lower quartile, median, and upper quartile of a sample.
///
/// Quantiles interpolate linearly between order statistics, so a
/// single value has all three quartiles equal to itself and an
/// empty sample has all three undefined (NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    lower: Measure,
    median: Measure,
    upper: Measure,
}

impl Quartiles {
    pub fn lower(&self) -> Measure {
        self.lower
    }
    pub fn median(&self) -> Measure {
        self.median
    }
    pub fn upper(&self) -> Measure {
        self.upper
    }
    pub fn iqr(&self) -> Measure {
        self.upper - self.lower
    }
    /// IQR rescaled to estimate a normal standard deviation.
    pub fn spread(&self) -> Measure {
        self.iqr() / IQR_NORMAL_SCALE
    }
}

impl From<&[Measure]> for Quartiles {
    fn from(sample: &[Measure]) -> Self {
        let ref sorted = sorted(sample);
        Self {
            lower: quantile(sorted, 0.25),
            median: quantile(sorted, 0.50),
            upper: quantile(sorted, 0.75),
        }
    }
}

/// Quantile of sorted data with linear interpolation.
pub fn quantile(sorted: &[Measure], q: f64) -> Measure {
    match sorted.len() {
        0 => Measure::NAN,
        n => {
            let h = (n - 1) as f64 * q.clamp(0., 1.);
            let lo = h.floor() as usize;
            let hi = h.ceil() as usize;
            sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
        }
    }
}

/// Median absolute deviation, rescaled to estimate a normal standard deviation.
pub fn mad(sample: &[Measure]) -> Measure {
    let median = Quartiles::from(sample).median();
    let deviations = sample
        .iter()
        .map(|x| (x - median).abs())
        .collect::<Vec<Measure>>();
    Quartiles::from(deviations.as_slice()).median() * MAD_NORMAL_SCALE
}

fn sorted(sample: &[Measure]) -> Vec<Measure> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(Measure::total_cmp);
    sorted
}
