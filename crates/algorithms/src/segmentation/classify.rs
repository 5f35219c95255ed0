//! Land/water classification by elevation sign
//!
//! A cell is land when its elevation is `>= 0` (sea level counts as land)
//! and water otherwise. Both masks are derived directly from the grid.

use std::fmt;
use std::str::FromStr;

use bathy_core::raster::{Mask, Raster};
use bathy_core::Error;
use serde::{Deserialize, Serialize};

/// Which side of sea level a feature lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Elevation >= 0; components are islands
    Land,
    /// Elevation < 0; components are lakes
    Water,
}

impl FeatureKind {
    /// Name of a single component of this kind
    pub fn feature_name(&self) -> &'static str {
        match self {
            FeatureKind::Land => "island",
            FeatureKind::Water => "lake",
        }
    }

    /// The complementary class
    pub fn opposite(&self) -> FeatureKind {
        match self {
            FeatureKind::Land => FeatureKind::Water,
            FeatureKind::Water => FeatureKind::Land,
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Land => write!(f, "land"),
            FeatureKind::Water => write!(f, "water"),
        }
    }
}

impl FromStr for FeatureKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "land" | "island" | "islands" => Ok(FeatureKind::Land),
            "water" | "lake" | "lakes" => Ok(FeatureKind::Water),
            other => Err(Error::InvalidParameter {
                name: "kind",
                value: other.to_string(),
                reason: "must be land or water".to_string(),
            }),
        }
    }
}

#[inline]
fn is_land(elevation: f32) -> bool {
    elevation >= 0.0
}

/// Land mask: `mask[r][c] = grid[r][c] >= 0`.
///
/// Total over any grid; an empty grid yields an empty mask.
pub fn classify_mask(grid: &Raster<f32>) -> Mask {
    Mask::from_raster(grid, is_land)
}

/// Water mask, the exact logical complement of [`classify_mask`] on the same grid.
pub fn classify_water(grid: &Raster<f32>) -> Mask {
    Mask::from_raster(grid, |v| !is_land(v))
}

/// Mask of the cells belonging to `kind`
pub fn classify(grid: &Raster<f32>, kind: FeatureKind) -> Mask {
    match kind {
        FeatureKind::Land => classify_mask(grid),
        FeatureKind::Water => classify_water(grid),
    }
}
