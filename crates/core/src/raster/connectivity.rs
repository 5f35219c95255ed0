//! Neighbor adjacency rules for connected-component analysis

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Edge neighbors: N, W, E, S
const ROOK_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Edge and corner neighbors, in row-major order around the center
const QUEEN_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacency rule defining which cells are "connected"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Connectivity {
    /// Up, down, left, right
    Four,
    /// Axis neighbors plus diagonals
    #[default]
    Eight,
}

impl Connectivity {
    /// Relative (row, col) offsets of the neighbors, center excluded
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &ROOK_OFFSETS,
            Connectivity::Eight => &QUEEN_OFFSETS,
        }
    }

    /// Number of neighbors of an interior cell
    pub fn degree(&self) -> usize {
        self.offsets().len()
    }

    /// In-bounds neighbors of (row, col) in a rows x cols grid
    pub fn neighbors(&self, row: usize, col: usize, rows: usize, cols: usize) -> Neighbors {
        Neighbors {
            offsets: self.offsets(),
            center_row: row,
            center_col: col,
            rows,
            cols,
            index: 0,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degree())
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(Error::InvalidParameter {
                name: "connectivity",
                value: other.to_string(),
                reason: "must be 4 or 8".to_string(),
            }),
        }
    }
}

impl FromStr for Connectivity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "4" | "four" | "rook" => Ok(Connectivity::Four),
            "8" | "eight" | "queen" => Ok(Connectivity::Eight),
            other => Err(Error::InvalidParameter {
                name: "connectivity",
                value: other.to_string(),
                reason: "must be 4 or 8".to_string(),
            }),
        }
    }
}

/// Iterator over the in-bounds neighbor cells of a center cell
pub struct Neighbors {
    offsets: &'static [(isize, isize)],
    center_row: usize,
    center_col: usize,
    rows: usize,
    cols: usize,
    index: usize,
}

impl Iterator for Neighbors {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.offsets.len() {
            let (dr, dc) = self.offsets[self.index];
            self.index += 1;

            let nr = self.center_row as isize + dr;
            let nc = self.center_col as isize + dc;

            if nr >= 0 && nc >= 0 && (nr as usize) < self.rows && (nc as usize) < self.cols {
                return Some((nr as usize, nc as usize));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Connectivity::Four.offsets().len(), 4);
        assert_eq!(Connectivity::Eight.offsets().len(), 8);
        assert_eq!(Connectivity::default(), Connectivity::Eight);
    }

    #[test]
    fn test_corner_neighbors_clipped() {
        let n: Vec<_> = Connectivity::Eight.neighbors(0, 0, 3, 3).collect();
        assert_eq!(n, vec![(0, 1), (1, 0), (1, 1)]);

        let n: Vec<_> = Connectivity::Four.neighbors(2, 2, 3, 3).collect();
        assert_eq!(n, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_interior_neighbors() {
        assert_eq!(Connectivity::Four.neighbors(1, 1, 3, 3).count(), 4);
        assert_eq!(Connectivity::Eight.neighbors(1, 1, 3, 3).count(), 8);
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<Connectivity>().unwrap(), Connectivity::Four);
        assert_eq!("queen".parse::<Connectivity>().unwrap(), Connectivity::Eight);
        assert!("6".parse::<Connectivity>().is_err());
        assert_eq!(Connectivity::try_from(8u8).unwrap(), Connectivity::Eight);
        assert!(Connectivity::try_from(3u8).is_err());
        assert_eq!(Connectivity::Four.to_string(), "4");
    }
}
