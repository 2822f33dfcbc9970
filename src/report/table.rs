use crate::Bounds;
use crate::Clustering;
use crate::Feature;
use crate::Summary;

/// Plain-text table of a run: a title, the effective bounds, then two
/// lines per cluster in cluster id order.
pub struct Report<'a> {
    title: &'a str,
    bounds: &'a Bounds,
    summaries: &'a [Summary],
}

impl<'a> Report<'a> {
    pub fn new(title: &'a str, run: &'a Clustering) -> Self {
        Self {
            title,
            bounds: &run.bounds,
            summaries: &run.summaries,
        }
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for feature in Feature::all() {
            let interval = self.bounds.get(feature);
            let side = |x: Option<f64>| x.map_or("-".to_string(), |x| format!("{:.3}", x));
            writeln!(
                f,
                "{:<10}{:>10} .. {:<10}",
                feature,
                side(interval.lower),
                side(interval.upper)
            )?;
        }
        for summary in self.summaries {
            writeln!(f, "{}", summary)?;
        }
        Ok(())
    }
}
