//! Headless bathymetry editor
//!
//! Holds one loaded grid and the detection settings. Loading replaces the
//! grid wholesale; every other operation reads it.

use std::path::Path;

use bathy_algorithms::features::{detect_channels, locate_features, Channel, ChannelParams, Feature, LocateParams};
use bathy_algorithms::segmentation::FeatureKind;
use bathy_colormap::{auto_params, draw_markers, raster_to_rgba, ColorScheme, Marker};
use bathy_core::io::{read_bathymetry, write_bathymetry};
use bathy_core::{ElevationGrid, Error, Result};
use tracing::debug;

/// Operations a bathymetry editor front end provides
pub trait BathymetryEditor {
    /// Load a raw big-endian float32 grid of the given shape
    fn load(&mut self, path: &Path, rows: usize, cols: usize) -> Result<()>;

    /// Write the current grid in the same raw format
    fn save(&self, path: &Path) -> Result<()>;

    /// Render the grid to RGBA with row 0 at the bottom, circling `features`
    fn render(&self, scheme: ColorScheme, features: &[Feature]) -> Result<Vec<u8>>;

    /// Locate islands (`Land`) or lakes (`Water`)
    fn detect(&self, kind: FeatureKind) -> Result<Vec<Feature>>;
}

/// Editor without a display; the CLI drives it
#[derive(Debug, Clone, Default)]
pub struct HeadlessEditor {
    grid: Option<ElevationGrid>,
    params: LocateParams,
}

impl HeadlessEditor {
    pub fn new(params: LocateParams) -> Self {
        Self { grid: None, params }
    }

    /// Editor over an in-memory grid
    #[cfg(test)]
    pub fn with_grid(grid: ElevationGrid, params: LocateParams) -> Self {
        Self {
            grid: Some(grid),
            params,
        }
    }

    pub fn params(&self) -> &LocateParams {
        &self.params
    }

    /// The loaded grid
    pub fn grid(&self) -> Result<&ElevationGrid> {
        self.grid
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("no bathymetry loaded".into()))
    }

    pub fn channels(&self, params: &ChannelParams) -> Result<Vec<Channel>> {
        detect_channels(self.grid()?, params)
    }
}

impl BathymetryEditor for HeadlessEditor {
    fn load(&mut self, path: &Path, rows: usize, cols: usize) -> Result<()> {
        let grid = read_bathymetry(path, rows, cols)?;
        debug!("loaded {}x{} grid from {}", rows, cols, path.display());
        self.grid = Some(grid);
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<()> {
        write_bathymetry(self.grid()?, path)
    }

    fn render(&self, scheme: ColorScheme, features: &[Feature]) -> Result<Vec<u8>> {
        let grid = self.grid()?;
        let (rows, cols) = grid.shape();

        let mut colormap = auto_params(grid, scheme);
        colormap.origin_lower = true;
        let mut rgba = raster_to_rgba(grid, &colormap);

        let markers: Vec<Marker> = features
            .iter()
            .map(|f| match f.kind {
                FeatureKind::Land => Marker::island(f.center.row, f.center.col),
                FeatureKind::Water => Marker::lake(f.center.row, f.center.col),
            })
            .collect();
        draw_markers(&mut rgba, rows, cols, &markers, colormap.origin_lower)?;

        Ok(rgba)
    }

    fn detect(&self, kind: FeatureKind) -> Result<Vec<Feature>> {
        locate_features(self.grid()?, kind, &self.params)
    }
}
