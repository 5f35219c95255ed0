//! # Bathy Algorithms
//!
//! Feature detection on bathymetry grids.
//!
//! ## Available Algorithm Categories
//!
//! - **segmentation**: land/water classification, connected-component labeling
//! - **geometry**: geometric median (Weiszfeld) for robust feature centers
//! - **features**: island and lake localization, narrow channel detection

pub mod features;
pub mod geometry;
pub(crate) mod maybe_rayon;
pub mod segmentation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::features::{
        detect_channels, find_islands, find_lakes, locate_features, Channel, ChannelDetector,
        ChannelParams, Feature, FeatureLocator, LocateParams, Orientation,
    };
    pub use crate::geometry::{geometric_median, geometric_median_with, MedianParams, Point};
    pub use crate::segmentation::{
        classify, classify_mask, classify_water, extract_components, Component, ComponentLabeling,
        ComponentLabels, FeatureKind,
    };
    pub use bathy_core::prelude::*;
}
