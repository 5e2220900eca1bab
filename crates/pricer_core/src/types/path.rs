//! Simulated price paths.
//!
//! A [`Path`] is the output of one simulation trial: the sequence of
//! `(time, spot)` observations produced by a path generator. Paths are built
//! in one go and are read-only afterwards; there are no mutating accessors.

use std::ops::Index;
use std::slice;

use super::error::PricingError;

/// One observation on a simulated path.
///
/// Holds the elapsed time in years and the simulated spot price.
///
/// # Examples
/// ```
/// use pricer_core::types::Point;
///
/// let point = Point::new(0.5, 102.3);
/// assert_eq!(point.time(), 0.5);
/// assert_eq!(point.spot(), 102.3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    time: f64,
    spot: f64,
}

impl Point {
    /// Creates a new observation.
    #[inline]
    pub fn new(time: f64, spot: f64) -> Self {
        Self { time, spot }
    }

    /// Elapsed time in years.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Simulated spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }
}

impl From<(f64, f64)> for Point {
    fn from((time, spot): (f64, f64)) -> Self {
        Self::new(time, spot)
    }
}

/// A discretised price trajectory.
///
/// # Invariants
/// - Observation times are strictly increasing.
/// - The path is never modified after construction.
///
/// The initial spot at `t = 0` is not part of the path; the first point is
/// the state after the first step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Wraps points produced by a generator that guarantees increasing times.
    ///
    /// Ordering is only checked in debug builds. Use
    /// [`try_from_points`](Self::try_from_points) for untrusted input.
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        debug_assert!(
            is_strictly_increasing(&points),
            "path times must be strictly increasing"
        );
        Self { points }
    }

    /// Builds a path after checking that times are strictly increasing.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` if two consecutive points
    /// are not in strictly increasing time order.
    pub fn try_from_points(points: Vec<Point>) -> Result<Self, PricingError> {
        if !is_strictly_increasing(&points) {
            return Err(PricingError::invalid_parameter(
                "points",
                "path times must be strictly increasing",
            ));
        }
        Ok(Self { points })
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The last observation, if any.
    #[inline]
    pub fn terminal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// All observations in time order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over observations in time order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl Index<usize> for Path {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn is_strictly_increasing(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].time < w[1].time)
}
