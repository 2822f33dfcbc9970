//! Raw measurement rows and the row-consistent transforms applied before clustering.
mod bounds;
mod feature;
mod features;
mod observation;
mod record;
mod shift;

pub use bounds::*;
pub use feature::*;
pub use features::*;
pub use observation::*;
pub use record::*;
pub use shift::*;
