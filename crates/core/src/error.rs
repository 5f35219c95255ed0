//! Error types for bathymetry processing

use thiserror::Error;

/// Main error type for grid loading and feature detection
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Empty or zero-sized grid
    #[error("Invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Malformed grid handed in at the boundary (ragged rows, bad shape)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Size mismatch: expected {expected} bytes for {rows}x{cols} float32 grid, got {actual}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Argument for which the operation is undefined (e.g. median of no points)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for bathymetry operations
pub type Result<T> = std::result::Result<T, Error>;
