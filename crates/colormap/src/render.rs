//! Raster-to-RGBA rendering using color schemes.

use crate::scheme::{evaluate, ColorScheme, Rgb};
use bathy_core::raster::{Raster, RasterElement};

/// Parameters for colormap rendering.
#[derive(Debug, Clone)]
pub struct ColormapParams {
    /// Color scheme to use.
    pub scheme: ColorScheme,
    /// Minimum value for normalization. Values below this are clamped.
    pub min: f64,
    /// Maximum value for normalization. Values above this are clamped.
    pub max: f64,
    /// Color for NaN cells (RGBA). Default: fully transparent.
    pub invalid_color: [u8; 4],
    /// Put grid row 0 at the bottom of the image
    pub origin_lower: bool,
}

impl Default for ColormapParams {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

impl ColormapParams {
    /// Create params with the given scheme; min/max must be set separately
    /// or use [`auto_params`] to detect from data.
    pub fn new(scheme: ColorScheme) -> Self {
        Self::with_range(scheme, 0.0, 1.0)
    }

    /// Create params with explicit min/max range.
    pub fn with_range(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self {
            scheme,
            min,
            max,
            invalid_color: [0, 0, 0, 0],
            origin_lower: false,
        }
    }

    /// Map a value to its position on the scheme's ramp.
    ///
    /// Sea-level schemes send `[min, 0)` to `[0, 0.5)` and `[0, max]` to
    /// `[0.5, 1]`; other schemes stretch `[min, max]` linearly.
    pub fn normalize(&self, v: f64) -> f64 {
        if self.scheme.splits_at_sea_level() {
            if v < 0.0 {
                if self.min < 0.0 {
                    0.5 * (1.0 - v / self.min)
                } else {
                    0.0
                }
            } else if self.max > 0.0 {
                0.5 + 0.5 * v / self.max
            } else {
                0.5
            }
        } else {
            let range = self.max - self.min;
            if range.abs() > f64::EPSILON {
                (v - self.min) / range
            } else {
                0.0
            }
        }
    }
}

/// Auto-detect min/max from a raster, returning `ColormapParams` ready to use.
///
/// Scans all finite cells to find the data range.
pub fn auto_params<T: RasterElement>(raster: &Raster<T>, scheme: ColorScheme) -> ColormapParams {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for val in raster.data().iter() {
        if let Some(v) = val.to_f64() {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }

    // All NaN or constant raster
    if !min.is_finite() || !max.is_finite() {
        min = 0.0;
        max = 1.0;
    } else if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }

    ColormapParams::with_range(scheme, min, max)
}

/// Convert a raster to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4`, one image row per grid
/// row. With `params.origin_lower` the image is flipped vertically so grid
/// row 0 is the bottom image row.
///
/// NaN cells are rendered with `params.invalid_color`.
pub fn raster_to_rgba<T: RasterElement>(raster: &Raster<T>, params: &ColormapParams) -> Vec<u8> {
    let (rows, cols) = raster.shape();
    let mut rgba = vec![0u8; rows * cols * 4];

    for ((row, col), val) in raster.data().indexed_iter() {
        let image_row = if params.origin_lower { rows - 1 - row } else { row };
        let offset = (image_row * cols + col) * 4;

        let pixel = match val.to_f64() {
            Some(v) if v.is_finite() => {
                let Rgb { r, g, b } = evaluate(params.scheme, params.normalize(v));
                [r, g, b, 255]
            }
            _ => params.invalid_color,
        };
        rgba[offset..offset + 4].copy_from_slice(&pixel);
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_to_rgba_basic() {
        let r = Raster::<f32>::from_rows(vec![vec![0.0, 0.5], vec![1.0, f32::NAN]]).unwrap();

        let params = ColormapParams::with_range(ColorScheme::Grayscale, 0.0, 1.0);
        let rgba = raster_to_rgba(&r, &params);

        assert_eq!(rgba.len(), 16); // 4 pixels * 4 bytes
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        assert_eq!(&rgba[4..8], &[128, 128, 128, 255]);
        assert_eq!(&rgba[8..12], &[255, 255, 255, 255]);
        // NaN -> transparent
        assert_eq!(&rgba[12..16], &[0, 0, 0, 0]);
    }

    #[test]
    fn origin_lower_flips_rows() {
        let r = Raster::<f32>::from_rows(vec![vec![0.0], vec![1.0]]).unwrap();
        let mut params = ColormapParams::with_range(ColorScheme::Grayscale, 0.0, 1.0);

        let top_down = raster_to_rgba(&r, &params);
        params.origin_lower = true;
        let bottom_up = raster_to_rgba(&r, &params);

        assert_eq!(&top_down[0..4], &bottom_up[4..8]);
        assert_eq!(&top_down[4..8], &bottom_up[0..4]);
        assert_eq!(bottom_up[0], 255);
    }

    #[test]
    fn sea_level_split() {
        let params = ColormapParams::with_range(ColorScheme::Bathymetry, -100.0, 20.0);
        assert!((params.normalize(-100.0) - 0.0).abs() < 1e-12);
        assert!((params.normalize(-50.0) - 0.25).abs() < 1e-12);
        assert!((params.normalize(0.0) - 0.5).abs() < 1e-12);
        assert!((params.normalize(10.0) - 0.75).abs() < 1e-12);
        assert!((params.normalize(20.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sea_level_split_one_sided() {
        // An all-land range still lands on the land half of the ramp
        let land = ColormapParams::with_range(ColorScheme::Bathymetry, 5.0, 10.0);
        assert!(land.normalize(5.0) >= 0.5);
        let sea = ColormapParams::with_range(ColorScheme::Bathymetry, -10.0, -5.0);
        assert!(sea.normalize(-7.0) < 0.5);
    }

    #[test]
    fn auto_params_range() {
        let r = Raster::<f32>::from_rows(vec![vec![10.0, 50.0, 100.0]]).unwrap();
        let params = auto_params(&r, ColorScheme::Terrain);
        assert!((params.min - 10.0).abs() < f64::EPSILON);
        assert!((params.max - 100.0).abs() < f64::EPSILON);
        assert!(!params.origin_lower);
    }

    #[test]
    fn auto_params_all_nan() {
        let r = Raster::<f32>::filled(1, 2, f32::NAN);
        let params = auto_params(&r, ColorScheme::Terrain);
        assert!((params.min - 0.0).abs() < f64::EPSILON);
        assert!((params.max - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_params_constant_raster() {
        let r = Raster::<f32>::filled(2, 2, 42.0);
        let params = auto_params(&r, ColorScheme::Terrain);
        assert!((params.min - 42.0).abs() < f64::EPSILON);
        assert!((params.max - 43.0).abs() < f64::EPSILON);
    }
}
