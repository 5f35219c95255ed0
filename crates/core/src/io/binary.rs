//! Raw big-endian float32 reading/writing

use crate::error::{Error, Result};
use crate::raster::Raster;
use byteorder::{BigEndian, ByteOrder};
use std::fs;
use std::path::Path;

const BYTES_PER_CELL: usize = 4;

/// Read a raw big-endian float32 grid of `rows x cols` cells from a file.
///
/// Fails with `InvalidDimensions` when either dimension is zero and with
/// `SizeMismatch` when the file does not hold exactly `rows * cols * 4` bytes.
pub fn read_bathymetry<P: AsRef<Path>>(path: P, rows: usize, cols: usize) -> Result<Raster<f32>> {
    check_dimensions(rows, cols)?;
    let bytes = fs::read(path.as_ref())?;
    read_bathymetry_from_buffer(&bytes, rows, cols)
}

/// Decode a raw big-endian float32 grid from an in-memory buffer.
pub fn read_bathymetry_from_buffer(data: &[u8], rows: usize, cols: usize) -> Result<Raster<f32>> {
    check_dimensions(rows, cols)?;

    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(BYTES_PER_CELL))
        .ok_or_else(|| Error::InvalidInput(format!("grid {}x{} is too large", rows, cols)))?;

    if data.len() != expected {
        return Err(Error::SizeMismatch {
            rows,
            cols,
            expected,
            actual: data.len(),
        });
    }

    let mut values = vec![0f32; rows * cols];
    BigEndian::read_f32_into(data, &mut values);

    Raster::from_vec(values, rows, cols)
}

/// Write a grid to a file in the raw big-endian float32 format.
pub fn write_bathymetry<P: AsRef<Path>>(raster: &Raster<f32>, path: P) -> Result<()> {
    let bytes = write_bathymetry_to_buffer(raster);
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Encode a grid into an in-memory raw big-endian float32 buffer.
pub fn write_bathymetry_to_buffer(raster: &Raster<f32>) -> Vec<u8> {
    // Logical (row-major) order, independent of memory layout
    let values: Vec<f32> = raster.data().iter().copied().collect();
    let mut bytes = vec![0u8; values.len() * BYTES_PER_CELL];
    BigEndian::write_f32_into(&values, &mut bytes);
    bytes
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_big_endian() {
        // 1.0 = 0x3F800000, -2.5 = 0xC0200000
        let bytes = [0x3F, 0x80, 0x00, 0x00, 0xC0, 0x20, 0x00, 0x00];
        let grid = read_bathymetry_from_buffer(&bytes, 1, 2).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), 1.0);
        assert_eq!(grid.get(0, 1).unwrap(), -2.5);
    }

    #[test]
    fn test_row_major_layout() {
        let grid = Raster::from_rows(vec![vec![1.0f32, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let bytes = write_bathymetry_to_buffer(&grid);
        assert_eq!(bytes.len(), 24);
        // Third value in the stream is (1, 0)
        assert_eq!(BigEndian::read_f32(&bytes[8..12]), 3.0);

        let back = read_bathymetry_from_buffer(&bytes, 3, 2).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_size_mismatch() {
        let bytes = vec![0u8; 4 * 5];
        let err = read_bathymetry_from_buffer(&bytes, 2, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch { expected: 24, actual: 20, .. }
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        let err = read_bathymetry_from_buffer(&[], 0, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { rows: 0, cols: 4 }));
    }

    #[test]
    fn test_file_roundtrip() {
        let grid = Raster::from_rows(vec![vec![-12.5f32, 0.0, 3.25], vec![7.0, -0.5, 100.0]]).unwrap();
        let tmp = tempfile::NamedTempFile::with_suffix(".bin").unwrap();
        write_bathymetry(&grid, tmp.path()).unwrap();
        assert_eq!(std::fs::metadata(tmp.path()).unwrap().len(), 24);
        assert_eq!(read_bathymetry(tmp.path(), 2, 3).unwrap(), grid);
    }

    #[test]
    fn test_missing_file() {
        let err = read_bathymetry("/nonexistent/bathy.bin", 2, 2).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
