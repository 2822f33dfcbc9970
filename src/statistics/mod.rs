//! Per-cluster location and robust spread.
mod moments;
mod quartiles;
mod summary;

pub use moments::*;
pub use quartiles::*;
pub use summary::*;
