//! Where bond records come from.
mod lines;
#[cfg(feature = "database")]
mod postgres;

pub use lines::*;
#[cfg(feature = "database")]
pub use postgres::*;

use crate::Record;

/// Read interface for bond measurement records.
pub trait Source {
    fn records(&self) -> anyhow::Result<Vec<Record>>;
}
