//! Ordered point sequences.
//!
//! A [`Trajectory`] is the route an agent traverses, in temporal order.  It is
//! never empty: every constructor takes at least one point, so `first()` and
//! `last()` are infallible.

use crate::Point2D;

// ── Trajectory ────────────────────────────────────────────────────────────────

/// A non-empty, ordered sequence of points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory(Vec<Point2D>);

#[allow(clippy::len_without_is_empty)]
impl Trajectory {
    /// A one-point trajectory at `start`.
    pub fn at(start: Point2D) -> Self {
        Trajectory(vec![start])
    }

    /// A one-point trajectory with room for `capacity` points in total.
    pub fn with_capacity(start: Point2D, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity.max(1));
        points.push(start);
        Trajectory(points)
    }

    /// Wrap `points`.  Returns `None` if `points` is empty.
    pub fn from_points(points: Vec<Point2D>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Trajectory(points))
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn first(&self) -> Point2D {
        self.0[0]
    }

    #[inline]
    pub fn last(&self) -> Point2D {
        self.0[self.0.len() - 1]
    }

    #[inline]
    pub fn push(&mut self, point: Point2D) {
        self.0.push(point);
    }

    /// Append every point of `other`.  The join point is kept twice if the
    /// two trajectories meet at the same coordinate.
    pub fn extend_from(&mut self, other: &Trajectory) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item     = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── HomingVector ──────────────────────────────────────────────────────────────

/// A straight-line, evenly sampled path from `start()` to `end()`.
///
/// The first point is exactly `start()` and the last exactly `end()`; every
/// intermediate point lies on the segment between them.  Built by
/// `ap_path::homing_path`; the Scout's return leg runs food → nest and the
/// published trail runs nest → food.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomingVector {
    path: Trajectory,
}

#[allow(clippy::len_without_is_empty)]
impl HomingVector {
    /// Wrap an already interpolated trajectory.
    pub fn from_trajectory(path: Trajectory) -> Self {
        Self { path }
    }

    #[inline]
    pub fn start(&self) -> Point2D {
        self.path.first()
    }

    #[inline]
    pub fn end(&self) -> Point2D {
        self.path.last()
    }

    #[inline]
    pub fn path(&self) -> &Trajectory {
        &self.path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }
}
