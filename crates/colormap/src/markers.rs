//! Feature markers drawn over a rendered RGBA buffer

use bathy_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Circle radius in pixels
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;

/// Island marker color (red)
pub const ISLAND_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Lake marker color (blue)
pub const LAKE_COLOR: [u8; 4] = [0, 0, 255, 255];

/// A circle outline centered on a fractional grid position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub row: f64,
    pub col: f64,
    pub radius: f64,
    pub color: [u8; 4],
}

impl Marker {
    pub fn new(row: f64, col: f64, color: [u8; 4]) -> Self {
        Self {
            row,
            col,
            radius: DEFAULT_MARKER_RADIUS,
            color,
        }
    }

    pub fn island(row: f64, col: f64) -> Self {
        Self::new(row, col, ISLAND_COLOR)
    }

    pub fn lake(row: f64, col: f64) -> Self {
        Self::new(row, col, LAKE_COLOR)
    }
}

/// Draw circle outlines into a row-major `rows x cols` RGBA buffer.
///
/// `origin_lower` must match the flag the buffer was rendered with so markers
/// land on their grid cells. Pixels outside the image are clipped.
///
/// # Errors
/// `InvalidInput` when `rgba` is not exactly `rows * cols * 4` bytes.
pub fn draw_markers(
    rgba: &mut [u8],
    rows: usize,
    cols: usize,
    markers: &[Marker],
    origin_lower: bool,
) -> Result<()> {
    if rgba.len() != rows * cols * 4 {
        return Err(Error::InvalidInput(format!(
            "{} bytes is not a {}x{} RGBA image",
            rgba.len(),
            rows,
            cols
        )));
    }

    for marker in markers {
        let r = marker.radius.max(0.0);
        let row_lo = (marker.row - r - 1.0).floor().max(0.0) as usize;
        let col_lo = (marker.col - r - 1.0).floor().max(0.0) as usize;
        let row_hi = ((marker.row + r + 1.0).ceil().max(0.0) as usize).min(rows);
        let col_hi = ((marker.col + r + 1.0).ceil().max(0.0) as usize).min(cols);

        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                let dist = (row as f64 - marker.row).hypot(col as f64 - marker.col);
                // One-pixel-wide ring
                if (dist - r).abs() >= 0.5 {
                    continue;
                }
                let image_row = if origin_lower { rows - 1 - row } else { row };
                let offset = (image_row * cols + col) * 4;
                rgba[offset..offset + 4].copy_from_slice(&marker.color);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(rgba: &[u8], cols: usize, row: usize, col: usize) -> [u8; 4] {
        let o = (row * cols + col) * 4;
        [rgba[o], rgba[o + 1], rgba[o + 2], rgba[o + 3]]
    }

    #[test]
    fn ring_around_center() {
        let (rows, cols) = (21, 21);
        let mut rgba = vec![0u8; rows * cols * 4];
        draw_markers(&mut rgba, rows, cols, &[Marker::island(10.0, 10.0)], false).unwrap();

        // Center untouched, ring at distance 5 painted
        assert_eq!(pixel(&rgba, cols, 10, 10), [0, 0, 0, 0]);
        assert_eq!(pixel(&rgba, cols, 5, 10), ISLAND_COLOR);
        assert_eq!(pixel(&rgba, cols, 10, 15), ISLAND_COLOR);
        assert_eq!(pixel(&rgba, cols, 10, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn clipped_at_edges() {
        let (rows, cols) = (4, 4);
        let mut rgba = vec![0u8; rows * cols * 4];
        draw_markers(&mut rgba, rows, cols, &[Marker::lake(0.0, 0.0)], false).unwrap();
        // Nothing within the 4x4 image is at distance 5 from the corner
        assert!(rgba.iter().all(|&b| b == 0));

        let mut rgba = vec![0u8; 8 * 8 * 4];
        draw_markers(&mut rgba, 8, 8, &[Marker::lake(0.0, 0.0)], false).unwrap();
        assert_eq!(pixel(&rgba, 8, 5, 0), LAKE_COLOR);
        assert_eq!(pixel(&rgba, 8, 0, 5), LAKE_COLOR);
    }

    #[test]
    fn origin_lower_flips_marker_rows() {
        let (rows, cols) = (12, 12);
        let mut rgba = vec![0u8; rows * cols * 4];
        draw_markers(&mut rgba, rows, cols, &[Marker::island(0.0, 6.0)], true).unwrap();
        // Grid (5, 6) sits on image row 12 - 1 - 5 = 6
        assert_eq!(pixel(&rgba, cols, 6, 6), ISLAND_COLOR);
        assert_eq!(pixel(&rgba, cols, 5, 6), [0, 0, 0, 0]);
    }

    #[test]
    fn wrong_buffer_size_is_error() {
        let mut rgba = vec![0u8; 3];
        let err = draw_markers(&mut rgba, 2, 2, &[Marker::island(1.0, 1.0)], false).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(rgba, vec![0, 0, 0]);
    }
}
