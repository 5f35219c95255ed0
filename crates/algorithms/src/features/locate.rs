//! Island and lake localization
//!
//! Classify the grid by sign, label the connected components of the chosen
//! class and place one marker per component at its geometric median.

use serde::{Deserialize, Serialize};
use tracing::debug;
use bathy_core::raster::{Connectivity, Raster};
use bathy_core::{Algorithm, Error, Result};

use crate::geometry::{geometric_median_with, MedianParams, Point, DEFAULT_EPS, DEFAULT_MAX_ITERATIONS};
use crate::maybe_rayon::try_map;
use crate::segmentation::{classify, extract_components, Component, FeatureKind};

/// Parameters for feature localization
#[derive(Debug, Clone, PartialEq)]
pub struct LocateParams {
    /// Adjacency rule for component extraction
    pub connectivity: Connectivity,
    /// Median convergence tolerance
    pub eps: f64,
    /// Median iteration safety bound
    pub max_iterations: usize,
    /// Keep only components fully surrounded by the opposite class
    /// (components touching the grid edge are dropped)
    pub require_enclosed: bool,
    /// Drop components with fewer cells than this (1 keeps everything)
    pub min_cells: usize,
}

impl Default for LocateParams {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            eps: DEFAULT_EPS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            require_enclosed: false,
            min_cells: 1,
        }
    }
}

impl LocateParams {
    fn median_params(&self) -> MedianParams {
        MedianParams {
            eps: self.eps,
            max_iterations: self.max_iterations,
        }
    }

    fn accepts(&self, component: &Component, rows: usize, cols: usize) -> bool {
        if component.len() < self.min_cells {
            return false;
        }
        !(self.require_enclosed && component.touches_border(rows, cols))
    }
}

/// A located island or lake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub kind: FeatureKind,
    pub component: Component,
    /// Geometric median of the component's cells
    pub center: Point,
    /// Whether the median iteration converged within its bound
    pub converged: bool,
}

impl Feature {
    pub fn label(&self) -> u32 {
        self.component.label
    }

    /// Number of cells in the feature
    pub fn size(&self) -> usize {
        self.component.len()
    }
}

/// Feature localization algorithm for one class
#[derive(Debug, Clone)]
pub struct FeatureLocator {
    pub kind: FeatureKind,
}

impl FeatureLocator {
    pub fn islands() -> Self {
        Self { kind: FeatureKind::Land }
    }

    pub fn lakes() -> Self {
        Self { kind: FeatureKind::Water }
    }
}

impl Algorithm for FeatureLocator {
    type Input = Raster<f32>;
    type Output = Vec<Feature>;
    type Params = LocateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        match self.kind {
            FeatureKind::Land => "FindIslands",
            FeatureKind::Water => "FindLakes",
        }
    }

    fn description(&self) -> &'static str {
        "Locate connected land or water regions and their geometric-median centers"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        locate_features(&input, self.kind, &params)
    }
}

/// Locate every connected component of `kind` in `grid`.
///
/// Returns one entry per accepted component in ascending label order.
/// With default parameters every component, however small, yields a
/// feature.
///
/// # Errors
/// `InvalidDimensions` for an empty grid; `InvalidParameter` for a bad
/// median tolerance or iteration bound.
pub fn locate_features(grid: &Raster<f32>, kind: FeatureKind, params: &LocateParams) -> Result<Vec<Feature>> {
    grid.ensure_not_empty()?;

    let (rows, cols) = grid.shape();
    let mask = classify(grid, kind);
    let labels = extract_components(&mask, params.connectivity);
    let total = labels.count();

    let components: Vec<Component> = labels
        .components()
        .into_iter()
        .filter(|c| params.accepts(c, rows, cols))
        .collect();

    let median = params.median_params();
    let features = try_map(components, |component| {
        let estimate = geometric_median_with(&component.points(), &median)?;
        if !estimate.converged {
            debug!(
                "{} {} median did not converge after {} iterations",
                kind.feature_name(),
                component.label,
                estimate.iterations
            );
        }
        Ok(Feature {
            kind,
            component,
            center: estimate.point,
            converged: estimate.converged,
        })
    })?;

    debug!(
        "{}: {} of {} components kept ({}-connectivity, {}x{} grid)",
        kind,
        features.len(),
        total,
        params.connectivity,
        rows,
        cols
    );

    Ok(features)
}

/// Locate land components
pub fn find_islands(grid: &Raster<f32>, params: &LocateParams) -> Result<Vec<Feature>> {
    locate_features(grid, FeatureKind::Land, params)
}

/// Locate water components
pub fn find_lakes(grid: &Raster<f32>, params: &LocateParams) -> Result<Vec<Feature>> {
    locate_features(grid, FeatureKind::Water, params)
}
