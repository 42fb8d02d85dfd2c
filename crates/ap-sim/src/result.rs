//! Per-agent and per-run results handed to the presentation layer.

use ap_core::{AgentId, AgentRole, Mode, Point2D, Trajectory};

/// One agent's complete trajectory and how it was produced.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentResult {
    pub id:   AgentId,
    pub role: AgentRole,
    pub mode: Mode,
    pub path: Trajectory,

    /// Number of leading points in `path` that came from a random walk.
    /// The remaining points are a homing leg or a replayed trail.
    pub exploration_len: usize,

    /// Terminal point of the agent's own random walk, if it walked.
    pub discovery: Option<Point2D>,
}

impl AgentResult {
    /// The random-walk prefix of `path`.
    pub fn exploration(&self) -> &[Point2D] {
        &self.path.points()[..self.exploration_len]
    }

    /// Everything after the random-walk prefix.
    pub fn homing(&self) -> &[Point2D] {
        &self.path.points()[self.exploration_len..]
    }
}

/// Everything a renderer needs from one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    /// Seed that reproduces this run.
    pub seed: u64,

    /// Nest marker; always the origin.
    pub nest: Point2D,

    /// Food marker: the end of the first published trail, or the first
    /// discovery if nothing was published.
    pub food: Option<Point2D>,

    /// Results in roster order.
    pub agents: Vec<AgentResult>,
}

impl RunOutcome {
    /// First agent with `role`.
    pub fn agent(&self, role: AgentRole) -> Option<&AgentResult> {
        self.agents.iter().find(|a| a.role == role)
    }

    /// Sum of all path lengths.
    pub fn total_points(&self) -> usize {
        self.agents.iter().map(|a| a.path.len()).sum()
    }
}
