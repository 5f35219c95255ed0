//! Connected-component labeling
//!
//! Labels maximal connected regions of true cells in a mask using an
//! explicit-stack flood fill. Components are numbered 1, 2, ... in the
//! row-major order of their first cell; 0 marks cells outside the mask.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use bathy_core::raster::{Connectivity, Mask, Raster};
use bathy_core::{Algorithm, Error, Result};

use crate::geometry::Point;

/// Result of labeling a mask
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLabels {
    labels: Raster<u32>,
    count: usize,
}

impl ComponentLabels {
    /// Label grid (0 = background, 1..=count = component id)
    pub fn labels(&self) -> &Raster<u32> {
        &self.labels
    }

    /// Number of components found
    pub fn count(&self) -> usize {
        self.count
    }

    /// Label of the cell at (row, col), 0 if outside the grid
    pub fn label_at(&self, row: usize, col: usize) -> u32 {
        self.labels.get(row, col).unwrap_or(0)
    }

    /// Cell count of every component, indexed by `label - 1`
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count];
        for &label in self.labels.data().iter() {
            if label > 0 {
                sizes[(label - 1) as usize] += 1;
            }
        }
        sizes
    }

    /// Gather the member cells of every component in ascending label order.
    ///
    /// Cells within a component are listed in row-major order.
    pub fn components(&self) -> Vec<Component> {
        let mut components: Vec<Component> = (1..=self.count as u32)
            .map(|label| Component {
                label,
                cells: Vec::new(),
                bbox: BoundingBox::empty(),
            })
            .collect();

        for ((row, col), &label) in self.labels.data().indexed_iter() {
            if label == 0 {
                continue;
            }
            let component = &mut components[(label - 1) as usize];
            component.cells.push((row, col));
            component.bbox.include(row, col);
        }

        components
    }
}

/// Inclusive cell extent of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl BoundingBox {
    fn empty() -> Self {
        Self {
            min_row: usize::MAX,
            min_col: usize::MAX,
            max_row: 0,
            max_col: 0,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Whether the box reaches the outer edge of a rows x cols grid
    pub fn touches_border(&self, rows: usize, cols: usize) -> bool {
        self.min_row == 0 || self.min_col == 0 || self.max_row + 1 >= rows || self.max_col + 1 >= cols
    }
}

/// A maximal connected set of same-class cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// 1-based component id
    pub label: u32,
    /// Member cells as (row, col), row-major
    pub cells: Vec<(usize, usize)>,
    pub bbox: BoundingBox,
}

impl Component {
    /// Number of member cells (always at least 1)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Member cells as median-solver points
    pub fn points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .map(|&(row, col)| Point::new(row as f64, col as f64))
            .collect()
    }

    /// Whether the component reaches the grid edge.
    ///
    /// A maximal component is enclosed by the opposite class exactly when it
    /// does not touch the border.
    pub fn touches_border(&self, rows: usize, cols: usize) -> bool {
        self.bbox.touches_border(rows, cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.binary_search(&(row, col)).is_ok()
    }
}

/// Connected-component labeling algorithm
#[derive(Debug, Clone, Default)]
pub struct ComponentLabeling;

impl Algorithm for ComponentLabeling {
    type Input = Mask;
    type Output = ComponentLabels;
    type Params = Connectivity;
    type Error = Error;

    fn name(&self) -> &'static str {
        "ComponentLabeling"
    }

    fn description(&self) -> &'static str {
        "Label connected regions of a boolean mask"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        Ok(extract_components(&input, params))
    }
}

/// Label the connected components of `mask`.
///
/// Every true cell receives the id of exactly one component and every false
/// cell keeps label 0. Labels are assigned in ascending row-major order of
/// each component's first cell, so identical input always yields identical
/// numbering. Each cell is labeled once; the traversal stack holds at most
/// one entry per cell.
///
/// # Arguments
/// * `mask` - Cells to group (true = member)
/// * `connectivity` - Adjacency rule, 4 or 8 neighbors
pub fn extract_components(mask: &Mask, connectivity: Connectivity) -> ComponentLabels {
    let (rows, cols) = mask.shape();
    let cells = mask.data();
    let mut labels = Array2::<u32>::zeros((rows, cols));
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut count: u32 = 0;

    for row in 0..rows {
        for col in 0..cols {
            if !cells[(row, col)] || labels[(row, col)] != 0 {
                continue;
            }

            count += 1;
            labels[(row, col)] = count;
            stack.push((row, col));

            // Label on push so no cell enters the stack twice
            while let Some((r, c)) = stack.pop() {
                for (nr, nc) in connectivity.neighbors(r, c, rows, cols) {
                    if cells[(nr, nc)] && labels[(nr, nc)] == 0 {
                        labels[(nr, nc)] = count;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    ComponentLabels {
        labels: Raster::from_array(labels),
        count: count as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> Mask {
        Mask::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|ch| ch == '#').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_all_false() {
        let m = Mask::empty(4, 5);
        let result = extract_components(&m, Connectivity::Eight);
        assert_eq!(result.count(), 0);
        assert!(result.labels().data().iter().all(|&l| l == 0));
        assert!(result.components().is_empty());
    }

    #[test]
    fn test_single_cell() {
        let m = mask(&["...", ".#.", "..."]);
        let result = extract_components(&m, Connectivity::Four);
        assert_eq!(result.count(), 1);
        assert_eq!(result.label_at(1, 1), 1);
        assert_eq!(result.sizes(), vec![1]);
    }

    #[test]
    fn test_diagonal_connectivity() {
        let m = mask(&["#..", ".#.", "..#"]);
        assert_eq!(extract_components(&m, Connectivity::Four).count(), 3);
        assert_eq!(extract_components(&m, Connectivity::Eight).count(), 1);
    }

    #[test]
    fn test_row_major_numbering() {
        let m = mask(&[
            "..##",
            "#...",
            "#.#.",
        ]);
        let result = extract_components(&m, Connectivity::Four);
        assert_eq!(result.count(), 3);
        assert_eq!(result.label_at(0, 2), 1);
        assert_eq!(result.label_at(0, 3), 1);
        assert_eq!(result.label_at(1, 0), 2);
        assert_eq!(result.label_at(2, 0), 2);
        assert_eq!(result.label_at(2, 2), 3);
    }

    #[test]
    fn test_u_shape_single_component() {
        // Both arms join through the bottom row; first cell is top-left
        let m = mask(&[
            "#.#",
            "#.#",
            "###",
        ]);
        let result = extract_components(&m, Connectivity::Four);
        assert_eq!(result.count(), 1);
        assert_eq!(result.sizes(), vec![7]);
    }

    #[test]
    fn test_partition() {
        let m = mask(&[
            "##..#",
            "#..##",
            "..#..",
            "#...#",
        ]);
        for conn in [Connectivity::Four, Connectivity::Eight] {
            let result = extract_components(&m, conn);
            let components = result.components();
            let total: usize = components.iter().map(Component::len).sum();
            assert_eq!(total, m.count());

            for r in 0..m.rows() {
                for c in 0..m.cols() {
                    let label = result.label_at(r, c);
                    if m.get(r, c) {
                        assert!(label >= 1 && label as usize <= result.count());
                        assert!(components[(label - 1) as usize].contains(r, c));
                    } else {
                        assert_eq!(label, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let m = mask(&["#.#.#", ".#.#.", "#.#.#"]);
        let a = extract_components(&m, Connectivity::Eight);
        let b = extract_components(&m, Connectivity::Eight);
        assert_eq!(a, b);
        assert_eq!(a.count(), 1);
        assert_eq!(extract_components(&m, Connectivity::Four).count(), 8);
    }

    #[test]
    fn test_components_bbox_and_border() {
        let m = mask(&[
            ".....",
            ".##..",
            ".#...",
            "....#",
        ]);
        let components = extract_components(&m, Connectivity::Eight).components();
        assert_eq!(components.len(), 2);

        let inner = &components[0];
        assert_eq!(inner.label, 1);
        assert_eq!(inner.cells, vec![(1, 1), (1, 2), (2, 1)]);
        assert_eq!((inner.bbox.height(), inner.bbox.width()), (2, 2));
        assert!(!inner.touches_border(4, 5));

        let corner = &components[1];
        assert_eq!(corner.cells, vec![(3, 4)]);
        assert!(corner.touches_border(4, 5));
    }

    #[test]
    fn test_fully_connected_large_mask() {
        let m = Mask::from_array(Array2::from_elem((200, 300), true));
        let result = extract_components(&m, Connectivity::Four);
        assert_eq!(result.count(), 1);
        assert_eq!(result.sizes(), vec![60_000]);
    }

    #[test]
    fn test_algorithm_trait() {
        let m = mask(&["#.#"]);
        let result = ComponentLabeling.execute_default(m).unwrap();
        assert_eq!(result.count(), 2);
    }
}
