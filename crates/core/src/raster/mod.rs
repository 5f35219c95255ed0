//! Grid data structures and operations

mod connectivity;
mod element;
mod grid;
mod mask;

pub use connectivity::{Connectivity, Neighbors};
pub use element::RasterElement;
pub use grid::{Raster, RasterStatistics};
pub use mask::Mask;
