use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D position in grid space, fractional rows and columns allowed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub row: f64,
    pub col: f64,
}

impl Point {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.row.hypot(self.col)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).norm()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.row * rhs, self.col * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.row / rhs, self.col / rhs)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Point::new(row as f64, col as f64)
    }
}
