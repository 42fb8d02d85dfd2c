//! Straight-line homing paths.

use ap_core::{HomingVector, Point2D, Trajectory};

/// `samples` points evenly spaced from `start` to `end`, both included.
///
/// Point `i` is `start + (end - start) * i / (samples - 1)`; the final point
/// is set to `end` exactly so callers can compare endpoints with `==`.
/// With `samples <= 1` the result is the single point `end`: a one-point
/// homing vector has already arrived.
///
/// Pure: identical arguments always yield identical output.
pub fn homing_path(start: Point2D, end: Point2D, samples: usize) -> HomingVector {
    if samples <= 1 {
        return HomingVector::from_trajectory(Trajectory::at(end));
    }

    let mut path = Trajectory::with_capacity(start, samples);
    let last = (samples - 1) as f64;
    for i in 1..samples - 1 {
        path.push(start.lerp(end, i as f64 / last));
    }
    path.push(end);
    HomingVector::from_trajectory(path)
}
