//! # Bathy Core
//!
//! Core types, traits and I/O for the bathymetry feature detection tools.
//!
//! This crate provides:
//! - `Raster<T>`: Generic 2D grid type (elevation grids, label grids)
//! - `Mask`: Boolean land/water grid derived from an elevation grid
//! - `Connectivity`: 4- or 8-neighbor adjacency rule
//! - Algorithm trait for a consistent API
//! - I/O for raw big-endian float32 bathymetry files

pub mod error;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Connectivity, Mask, Raster, RasterElement};

/// Elevation grid: rows x cols of 32-bit floats, negative values are water.
pub type ElevationGrid = Raster<f32>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{Connectivity, Mask, Raster, RasterElement};
    pub use crate::Algorithm;
    pub use crate::ElevationGrid;
}

/// Core trait for all algorithms.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
