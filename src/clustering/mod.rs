//! Centroid clustering in whitened feature space.
//!
//! ## Core Types
//!
//! - [`Whitening`] — Per-feature scale estimator, fitted into a [`Scaler`]
//! - [`Seeding`] — Initial centroids: random observations or a fixed matrix
//! - [`Lloyd`] — Assignment and update steps shared by every mode
//! - [`KMeans`] — Owned clustering state driving the Lloyd loop
//! - [`Assignment`] — Final per-observation labels
mod assignment;
mod kmeans;
mod lloyd;
mod seeding;
mod whitening;

pub use assignment::*;
pub use kmeans::*;
pub use lloyd::*;
pub use seeding::*;
pub use whitening::*;
