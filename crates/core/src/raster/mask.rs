//! Boolean cell mask

use crate::error::{Error, Result};
use crate::raster::{Raster, RasterElement};
use ndarray::Array2;

/// Boolean grid marking which cells belong to the class under study.
///
/// A mask always has the shape of the grid it was derived from. It is
/// recomputed from its source grid whenever needed and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    data: Array2<bool>,
}

impl Mask {
    /// Build a mask by testing every cell of a raster
    pub fn from_raster<T, F>(raster: &Raster<T>, predicate: F) -> Self
    where
        T: RasterElement,
        F: Fn(T) -> bool,
    {
        Self {
            data: raster.data().mapv(predicate),
        }
    }

    /// Create a mask from an ndarray
    pub fn from_array(data: Array2<bool>) -> Self {
        Self { data }
    }

    /// Create a mask from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(Error::InvalidInput("mask rows have differing lengths".into()));
        }
        let flat: Vec<bool> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self { data })
    }

    /// All-false mask of the given shape
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), false),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at (row, col); out-of-range cells read as false
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data.get((row, col)).copied().unwrap_or(false)
    }

    /// Number of true cells
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn data(&self) -> &Array2<bool> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_raster() {
        let raster = Raster::from_rows(vec![vec![-1.0f32, 0.0], vec![2.0, -0.5]]).unwrap();
        let mask = Mask::from_raster(&raster, |v| v >= 0.0);
        assert!(!mask.get(0, 0));
        assert!(mask.get(0, 1));
        assert!(mask.get(1, 0));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_out_of_range_reads_false() {
        let mask = Mask::from_rows(vec![vec![true]]).unwrap();
        assert!(mask.get(0, 0));
        assert!(!mask.get(1, 0));
        assert!(!mask.get(0, 7));
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(Mask::from_rows(vec![vec![true, false], vec![true]]).is_err());
    }
}
