//! Output handed to people and plotting tools.
mod scatter;
mod table;

pub use scatter::*;
pub use table::*;
