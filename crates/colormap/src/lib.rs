//! # Bathy Colormap
//!
//! Color mapping, raster-to-RGBA rendering and feature marker overlays for
//! bathymetry grids.
//!
//! The `Bathymetry` scheme splits at sea level: water cells are shaded from a
//! depth ramp and land cells from a terrain ramp. Markers are drawn as circle
//! outlines on top of a rendered buffer.
//!
//! ## Usage
//!
//! ```ignore
//! use bathy_colormap::{auto_params, draw_markers, raster_to_rgba, ColorScheme, Marker};
//!
//! let mut params = auto_params(&grid, ColorScheme::Bathymetry);
//! params.origin_lower = true;
//! let mut rgba = raster_to_rgba(&grid, &params);
//! draw_markers(&mut rgba, grid.rows(), grid.cols(), &[Marker::island(12.0, 40.5)], true)?;
//! ```

mod markers;
mod render;
mod scheme;

pub use markers::{draw_markers, Marker, DEFAULT_MARKER_RADIUS, ISLAND_COLOR, LAKE_COLOR};
pub use render::{auto_params, raster_to_rgba, ColormapParams};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};
