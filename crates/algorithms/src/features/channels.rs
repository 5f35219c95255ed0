//! Narrow channel detection
//!
//! A water cell is a horizontal channel cell when land lies within
//! `flank_width` cells straight above it and within `flank_width` cells
//! straight below it; vertical channel cells use left/right instead. A
//! channel is a maximal straight run of such cells at least `min_length`
//! long. Every row and every column is scanned end to end, so runs are found
//! regardless of the direction they would be traced in.

use serde::{Deserialize, Serialize};
use tracing::debug;
use bathy_core::raster::{Mask, Raster};
use bathy_core::{Algorithm, Error, Result};

use crate::geometry::Point;
use crate::segmentation::classify_mask;

/// Parameters for channel detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelParams {
    /// Minimum run length in cells
    pub min_length: usize,
    /// Maximum distance (cells) to the flanking land on each side
    pub flank_width: usize,
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self {
            min_length: 5,
            flank_width: 2,
        }
    }
}

impl ChannelParams {
    fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(Error::InvalidParameter {
                name: "min_length",
                value: "0".to_string(),
                reason: "channel length must be at least 1".to_string(),
            });
        }
        if self.flank_width == 0 {
            return Err(Error::InvalidParameter {
                name: "flank_width",
                value: "0".to_string(),
                reason: "flank width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Direction a channel runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Along a row, flanked above and below
    Horizontal,
    /// Along a column, flanked left and right
    Vertical,
}

/// A straight run of narrow water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub orientation: Orientation,
    /// First cell of the run (leftmost or topmost)
    pub start: (usize, usize),
    /// Run length in cells
    pub length: usize,
    /// Midpoint of the run
    pub center: Point,
}

impl Channel {
    fn new(orientation: Orientation, start: (usize, usize), length: usize) -> Self {
        let half = (length - 1) as f64 / 2.0;
        let center = match orientation {
            Orientation::Horizontal => Point::new(start.0 as f64, start.1 as f64 + half),
            Orientation::Vertical => Point::new(start.0 as f64 + half, start.1 as f64),
        };
        Self {
            orientation,
            start,
            length,
            center,
        }
    }

    /// Last cell of the run
    pub fn end(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.start.0, self.start.1 + self.length - 1),
            Orientation::Vertical => (self.start.0 + self.length - 1, self.start.1),
        }
    }

    /// Cells covered by the run, from start to end
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (r, c) = self.start;
        (0..self.length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => (r, c + i),
                Orientation::Vertical => (r + i, c),
            })
            .collect()
    }
}

/// Channel detection algorithm
#[derive(Debug, Clone, Default)]
pub struct ChannelDetector;

impl Algorithm for ChannelDetector {
    type Input = Raster<f32>;
    type Output = Vec<Channel>;
    type Params = ChannelParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "FindChannels"
    }

    fn description(&self) -> &'static str {
        "Find straight runs of narrow water flanked by land"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        detect_channels(&input, &params)
    }
}

/// Find narrow straight water channels.
///
/// Results are ordered by start cell (row-major), horizontal before
/// vertical for channels sharing a start cell.
///
/// # Errors
/// `InvalidDimensions` for an empty grid, `InvalidParameter` when
/// `min_length` or `flank_width` is zero.
pub fn detect_channels(grid: &Raster<f32>, params: &ChannelParams) -> Result<Vec<Channel>> {
    grid.ensure_not_empty()?;
    params.validate()?;

    let land = classify_mask(grid);
    let (rows, cols) = land.shape();
    let w = params.flank_width;

    let mut channels = Vec::new();

    for row in 0..rows {
        collect_runs(
            (0..cols).map(|col| (row, col)),
            |r, c| !land.get(r, c) && land_above(&land, r, c, w) && land_below(&land, r, c, w),
            Orientation::Horizontal,
            params.min_length,
            &mut channels,
        );
    }

    for col in 0..cols {
        collect_runs(
            (0..rows).map(|row| (row, col)),
            |r, c| !land.get(r, c) && land_left(&land, r, c, w) && land_right(&land, r, c, w),
            Orientation::Vertical,
            params.min_length,
            &mut channels,
        );
    }

    channels.sort_by_key(|ch| (ch.start, ch.orientation));

    debug!(
        "channels: {} found (min length {}, flank width {})",
        channels.len(),
        params.min_length,
        params.flank_width
    );

    Ok(channels)
}

fn collect_runs<I, F>(
    line: I,
    is_channel: F,
    orientation: Orientation,
    min_length: usize,
    out: &mut Vec<Channel>,
) where
    I: Iterator<Item = (usize, usize)>,
    F: Fn(usize, usize) -> bool,
{
    let mut run: Option<((usize, usize), usize)> = None;

    for (r, c) in line {
        if is_channel(r, c) {
            run = match run {
                Some((start, len)) => Some((start, len + 1)),
                None => Some(((r, c), 1)),
            };
        } else if let Some((start, len)) = run.take() {
            if len >= min_length {
                out.push(Channel::new(orientation, start, len));
            }
        }
    }

    if let Some((start, len)) = run {
        if len >= min_length {
            out.push(Channel::new(orientation, start, len));
        }
    }
}

fn land_above(land: &Mask, row: usize, col: usize, width: usize) -> bool {
    (1..=width.min(row)).any(|k| land.get(row - k, col))
}

fn land_below(land: &Mask, row: usize, col: usize, width: usize) -> bool {
    let reach = width.min(land.rows().saturating_sub(row + 1));
    (1..=reach).any(|k| land.get(row + k, col))
}

fn land_left(land: &Mask, row: usize, col: usize, width: usize) -> bool {
    (1..=width.min(col)).any(|k| land.get(row, col - k))
}

fn land_right(land: &Mask, row: usize, col: usize, width: usize) -> bool {
    let reach = width.min(land.cols().saturating_sub(col + 1));
    (1..=reach).any(|k| land.get(row, col + k))
}
