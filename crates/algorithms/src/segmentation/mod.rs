//! Grid segmentation
//!
//! - **Classification**: elevation grid to land or water mask (sea level at 0, inclusive as land)
//! - **Labeling**: connected components of a mask under 4- or 8-connectivity

mod classify;
mod label;

pub use classify::{classify, classify_mask, classify_water, FeatureKind};
pub use label::{extract_components, BoundingBox, Component, ComponentLabeling, ComponentLabels};
