//! Geometric median (Weiszfeld's algorithm)
//!
//! The geometric median minimizes the sum of Euclidean distances to a point
//! set. Unlike the arithmetic mean it stays on or near the bulk of an
//! elongated or irregular shape, which makes it a good anchor for labelling
//! a winding channel or a crescent-shaped island.
//!
//! Iteration:
//! ```text
//! y0     = mean(X)
//! T      = sum(x_i / d_i) / sum(1 / d_i)      over d_i = |x_i - y| > 0
//! y_next = T                                  if no x_i coincides with y
//!        = T + R / (|R| * sum(1 / d_i))       otherwise, R = (T - y) * sum(1 / d_i)
//! ```
//! Stops when `|y_next - y| < eps`, when every point coincides with `y`, or
//! when `|R| < eps`.

use bathy_core::{Error, Result};

use super::Point;

/// Default convergence tolerance
pub const DEFAULT_EPS: f64 = 1e-5;

/// Default iteration safety bound
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Parameters for the geometric median solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianParams {
    /// Step size below which the estimate is considered converged
    pub eps: f64,
    /// Upper bound on Weiszfeld iterations
    pub max_iterations: usize,
}

impl Default for MedianParams {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MedianParams {
    fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                value: self.eps.to_string(),
                reason: "tolerance must be a positive finite number".to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                value: "0".to_string(),
                reason: "at least one iteration is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Outcome of a median computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianEstimate {
    pub point: Point,
    /// Weiszfeld iterations performed
    pub iterations: usize,
    /// False when the safety bound was hit; `point` is then the last estimate
    pub converged: bool,
}

/// Arithmetic mean of a non-empty point set
pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(Error::InvalidArgument(
            "centroid of an empty point set is undefined".into(),
        ));
    }
    let sum = points.iter().fold(Point::default(), |acc, &p| acc + p);
    Ok(sum / points.len() as f64)
}

/// Geometric median of `points` with tolerance `eps` and the default
/// iteration bound.
///
/// # Errors
/// `InvalidArgument` for an empty point set, `InvalidParameter` for a
/// non-positive `eps`. Hitting the iteration bound is not an error.
pub fn geometric_median(points: &[Point], eps: f64) -> Result<Point> {
    let params = MedianParams {
        eps,
        ..MedianParams::default()
    };
    geometric_median_with(points, &params).map(|estimate| estimate.point)
}

/// Geometric median with explicit parameters, reporting convergence.
pub fn geometric_median_with(points: &[Point], params: &MedianParams) -> Result<MedianEstimate> {
    if points.is_empty() {
        return Err(Error::InvalidArgument(
            "geometric median of an empty point set is undefined".into(),
        ));
    }
    params.validate()?;

    // A repeated point is its own median; the mean could drift by rounding.
    let first = points[0];
    if points.iter().all(|p| *p == first) {
        return Ok(MedianEstimate {
            point: first,
            iterations: 0,
            converged: true,
        });
    }

    let eps = params.eps;
    let mut y = centroid(points)?;

    for iteration in 1..=params.max_iterations {
        let mut weighted = Point::default();
        let mut inv_sum = 0.0;
        let mut coincident = 0usize;

        for p in points {
            let d = p.distance(&y);
            if d == 0.0 {
                coincident += 1;
                continue;
            }
            let inv = 1.0 / d;
            weighted = weighted + *p * inv;
            inv_sum += inv;
        }

        if coincident == points.len() {
            return Ok(MedianEstimate {
                point: y,
                iterations: iteration,
                converged: true,
            });
        }

        let t = weighted / inv_sum;

        let next = if coincident == 0 {
            t
        } else {
            let r_vec = (t - y) * inv_sum;
            let r = r_vec.norm();
            if r < eps {
                return Ok(MedianEstimate {
                    point: y,
                    iterations: iteration,
                    converged: true,
                });
            }
            t + r_vec / (r * inv_sum)
        };

        if y.distance(&next) < eps {
            return Ok(MedianEstimate {
                point: next,
                iterations: iteration,
                converged: true,
            });
        }

        y = next;
    }

    Ok(MedianEstimate {
        point: y,
        iterations: params.max_iterations,
        converged: false,
    })
}
