//! Random-walk exploration.

use ap_core::{AgentRng, Point2D, Trajectory};

/// Output of [`random_walk`].
#[derive(Clone, Debug, PartialEq)]
pub struct Walk {
    /// `steps + 1` points starting at the nest.
    pub path: Trajectory,
    /// Where the walk ended; equal to `path.last()`.
    pub discovery: Point2D,
}

/// Walk `steps` steps of length `step_size` from the origin, each along a
/// heading drawn uniformly from `[0, 2π)`.
///
/// `steps = 0` returns the origin alone, with the origin as the discovery.
pub fn random_walk(steps: usize, step_size: f64, rng: &mut AgentRng) -> Walk {
    let mut path = Trajectory::with_capacity(Point2D::ORIGIN, steps + 1);
    let mut here = Point2D::ORIGIN;
    for _ in 0..steps {
        here = here.offset_polar(rng.heading(), step_size);
        path.push(here);
    }
    Walk { path, discovery: here }
}
