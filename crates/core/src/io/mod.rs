//! I/O for raw bathymetry grids
//!
//! The on-disk format is headerless: `rows * cols` big-endian IEEE-754
//! float32 values in row-major order. Dimensions are supplied by the caller.

mod binary;

pub use binary::{read_bathymetry, write_bathymetry};

// Buffer-based I/O (always available, no filesystem dependency)
pub use binary::{read_bathymetry_from_buffer, write_bathymetry_to_buffer};
