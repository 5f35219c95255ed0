//! Point geometry
//!
//! - **Geometric median**: Weiszfeld iteration, robust feature centers
//! - **Point**: fractional (row, col) position with vector arithmetic

mod median;
mod point;

pub use median::{
    centroid, geometric_median, geometric_median_with, MedianEstimate, MedianParams,
    DEFAULT_EPS, DEFAULT_MAX_ITERATIONS,
};
pub use point::Point;
