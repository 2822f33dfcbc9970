//! K-means clustering of hydrogen bond geometry.
//!
//! Each contact in a structural database is described by a donor–acceptor
//! distance, an angle, and a torsion. This crate filters those measurements,
//! partitions them with Lloyd's algorithm in whitened feature space, and
//! summarizes each cluster with location and robust spread estimates.
//!
//! ## Pipeline
//!
//! 1. **Shift** — move the torsion branch cut so clusters stay contiguous
//! 2. **Bounds** — drop rows outside the requested geometric window
//! 3. **Whitening** — rescale each feature to comparable units
//! 4. **KMeans** — cluster from random points or from reference kernels
//! 5. **Summary** — per-cluster means, IQR spreads, and kernel rows
//!
//! ## Core Types
//!
//! - [`Observation`] — One (distance, angle, torsion, weight) row
//! - [`Features`] — Parallel feature columns with row-consistent filtering
//! - [`Assignment`] — Per-row cluster labels
//! - [`Summary`] — Per-cluster statistics in kernel-compatible form
//! - [`Kernels`] — Reference centroids keyed by bond type
pub mod clustering;
pub mod config;
pub mod error;
pub mod geometry;
pub mod kernels;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod statistics;

#[cfg(feature = "server")]
pub mod cli;

#[cfg(test)]
mod fixtures;

pub use clustering::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use kernels::*;
pub use pipeline::*;
pub use report::*;
pub use source::*;
pub use statistics::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw geometric values: distances in Å, angles and torsions in degrees.
pub type Measure = f64;
/// Redundancy counts attached to each observation.
pub type Weight = f64;
/// Cluster index in `0..k`.
pub type Label = usize;
/// A (distance, angle, torsion) triple, raw or whitened.
pub type Point = [Measure; 3];

// ============================================================================
// K-MEANS CLUSTERING
// ============================================================================
/// Default number of clusters when no bond type is given.
pub const KMEANS_CLUSTERS: usize = 2;
/// Upper bound on Lloyd iterations before giving up on convergence.
pub const KMEANS_ITERATIONS: usize = 10;
/// Seed for centroid sampling and empty cluster reseeding.
pub const KMEANS_SEED: u64 = 0x4842;

// ============================================================================
// ROBUST STATISTICS
// ============================================================================
/// IQR of the standard normal distribution, 2·√2·erf⁻¹(½).
/// Dividing an IQR by this yields a standard deviation estimate.
pub const IQR_NORMAL_SCALE: Measure = 1.348_979_500_392_163_4;
/// Median absolute deviation to standard deviation, 1 / Φ⁻¹(¾).
pub const MAD_NORMAL_SCALE: Measure = 1.482_602_218_505_602;

// ============================================================================
// GEOMETRY
// ============================================================================
/// Period of the torsion angle in degrees.
pub const TORSION_PERIOD: Measure = 360.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Route `hbclust` run logs to the terminal and to `logs/<unix time>.log`.
/// The terminal shows INFO (rows read, dropped rows, convergence); the
/// file also keeps DEBUG (per-iteration rms, empty cluster reseeds).
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
