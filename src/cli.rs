//! Command-line surface.
use crate::Config;
use crate::Interval;
use crate::Measure;
use crate::Whitening;
use clap::Parser;
use std::path::PathBuf;

/// Cluster hydrogen bond distance/angle/torsion measurements.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bond records, one JSON object per line.
    #[arg(long, required_unless_present = "database")]
    pub input: Option<PathBuf>,
    /// Read records from this PostgreSQL table instead (uses DB_URL).
    #[arg(long, conflicts_with = "input")]
    pub database: Option<String>,
    /// Run configuration as JSON; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Bonds are chemically symmetric so both directions should be included.
    #[arg(long)]
    pub symmetric: bool,
    /// Distance left boundary.
    #[arg(long)]
    pub d1: Option<Measure>,
    /// Distance right boundary.
    #[arg(long)]
    pub d2: Option<Measure>,
    /// Angle left boundary.
    #[arg(long)]
    pub a1: Option<Measure>,
    /// Angle right boundary.
    #[arg(long)]
    pub a2: Option<Measure>,
    /// Torsion left boundary.
    #[arg(long)]
    pub t1: Option<Measure>,
    /// Torsion right boundary.
    #[arg(long)]
    pub t2: Option<Measure>,
    /// Torsions below this value are shifted up by 360°.
    #[arg(long, allow_negative_numbers = true)]
    pub torshift: Option<Measure>,
    /// Number of clusters.
    #[arg(long)]
    pub kmeans: Option<usize>,
    /// Weight distribution by redundancy counts.
    #[arg(long)]
    pub weighted: bool,
    /// Hydrogen bond type whose kernels seed the centroids.
    #[arg(long, short = 'b')]
    pub hbtype: Option<String>,
    /// Kernel store (JSON object of bond type to rows).
    #[arg(long)]
    pub kernels: Option<PathBuf>,
    /// Save this run's clusters into the kernel store under this name.
    #[arg(long, requires = "kernels")]
    pub export: Option<String>,
    /// Write scatter projections as JSON for plotting.
    #[arg(long)]
    pub scatter: Option<PathBuf>,
    /// Title of the report.
    #[arg(long, default_value = "DAT clusters")]
    pub title: String,
    /// Seed for centroid sampling.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Maximum number of Lloyd iterations.
    #[arg(long)]
    pub iterations: Option<usize>,
    /// Whiten by median absolute deviation instead of standard deviation.
    #[arg(long)]
    pub robust: bool,
}

impl Args {
    /// Merge flags over a base configuration.
    pub fn configure(&self, base: Config) -> Config {
        let merge = |interval: Interval, lower: Option<Measure>, upper: Option<Measure>| {
            Interval::new(lower.or(interval.lower), upper.or(interval.upper))
        };
        Config {
            d_bounds: merge(base.d_bounds, self.d1, self.d2),
            a_bounds: merge(base.a_bounds, self.a1, self.a2),
            t_bounds: merge(base.t_bounds, self.t1, self.t2),
            torsion_shift: self.torshift.or(base.torsion_shift),
            symmetric: self.symmetric || base.symmetric,
            k: self.kmeans.unwrap_or(base.k),
            bond_type: self.hbtype.clone().or(base.bond_type),
            weighted: self.weighted || base.weighted,
            seed: self.seed.unwrap_or(base.seed),
            iterations: self.iterations.unwrap_or(base.iterations),
            whitening: match self.robust {
                true => Whitening::Median,
                false => base.whitening,
            },
        }
    }

    /// Load the base configuration, if any, and apply the flags.
    pub fn config(&self) -> anyhow::Result<Config> {
        let base = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(self.configure(base))
    }
}
