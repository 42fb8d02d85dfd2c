//! Playback schedule and plot extent for animating a run.
//!
//! Agents are animated one after another: the first agent's path is drawn
//! point by point, then stays fully visible while the second agent's path is
//! drawn, and so on.  One frame reveals one point, so a run has as many
//! frames as it has points in total.

use ap_core::Point2D;
use ap_sim::{AgentResult, RunOutcome};

/// Frames per second used by the reference animation.
pub const DEFAULT_FPS: u32 = 20;

/// Margin added around the data extent, in plane units.
pub const DEFAULT_PAD: f64 = 2.0;

// ── Timeline ──────────────────────────────────────────────────────────────────

/// What is visible in one animation frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Index (roster order) of the agent being drawn.
    pub active: usize,
    /// Index of the active agent's current point.
    pub cursor: usize,
    /// Points visible per agent: earlier agents complete, the active agent
    /// up to and including `cursor`, later agents none.
    pub visible: Vec<usize>,
}

/// Sequential playback over every agent's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    lens: Vec<usize>,
}

impl Timeline {
    pub fn new(agents: &[AgentResult]) -> Self {
        Self::from_lengths(agents.iter().map(|a| a.path.len()).collect())
    }

    pub fn from_lengths(lens: Vec<usize>) -> Self {
        Self { lens }
    }

    pub fn total_frames(&self) -> usize {
        self.lens.iter().sum()
    }

    /// Wall-clock length of the animation at `fps` frames per second.
    /// Zero when `fps` is zero.
    pub fn duration_secs(&self, fps: u32) -> f64 {
        if fps == 0 {
            return 0.0;
        }
        self.total_frames() as f64 / fps as f64
    }

    /// The frame at `index`, or `None` past the end.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        let mut offset = 0;
        for (active, &len) in self.lens.iter().enumerate() {
            if index < offset + len {
                let cursor = index - offset;
                let visible = self
                    .lens
                    .iter()
                    .enumerate()
                    .map(|(j, &l)| match j.cmp(&active) {
                        std::cmp::Ordering::Less    => l,
                        std::cmp::Ordering::Equal   => cursor + 1,
                        std::cmp::Ordering::Greater => 0,
                    })
                    .collect();
                return Some(Frame { active, cursor, visible });
            }
            offset += len;
        }
        None
    }

    /// Every frame in order.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..self.total_frames()).filter_map(move |i| self.frame(i))
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned plot extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The smallest box holding every path point, the nest, and the food
    /// marker, grown by `pad` on each side.
    pub fn enclosing(outcome: &RunOutcome, pad: f64) -> Bounds {
        let markers = std::iter::once(outcome.nest).chain(outcome.food);
        let points = outcome
            .agents
            .iter()
            .flat_map(|a| a.path.iter().copied())
            .chain(markers);
        Self::of_points(points, pad)
    }

    /// Extent of `points` grown by `pad`.  An empty input yields a box of
    /// half-width `pad` around the origin.
    pub fn of_points(points: impl IntoIterator<Item = Point2D>, pad: f64) -> Bounds {
        let mut b = Bounds {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        if b.min_x > b.max_x {
            b = Bounds { min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 };
        }
        Bounds {
            min_x: b.min_x - pad,
            max_x: b.max_x + pad,
            min_y: b.min_y - pad,
            max_y: b.max_y + pad,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: Point2D) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}
