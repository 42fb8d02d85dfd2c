//! Plain data row types written by output backends.

use ap_sim::AgentResult;

/// Which part of an agent's path a point belongs to.  Renderers draw the
/// two segments in different tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Explore,
    Homing,
}

impl Segment {
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Explore => "explore",
            Segment::Homing  => "homing",
        }
    }
}

/// One point of one agent's trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub agent_id: u32,
    pub role:     &'static str,
    pub mode:     &'static str,
    pub segment:  Segment,
    /// Position in the agent's path (temporal order).
    pub index:    usize,
    pub x:        f64,
    pub y:        f64,
}

/// A fixed map marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRow {
    /// `"nest"` or `"food"`.
    pub label: &'static str,
    pub x:     f64,
    pub y:     f64,
}

/// One row per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub seed:         u64,
    pub steps:        usize,
    pub step_size:    f64,
    pub agents:       usize,
    pub total_frames: usize,
    pub min_x:        f64,
    pub max_x:        f64,
    pub min_y:        f64,
    pub max_y:        f64,
}

/// Flatten `result` into rows, tagging each point with its segment.
pub fn trajectory_rows(result: &AgentResult) -> Vec<TrajectoryRow> {
    result
        .path
        .iter()
        .enumerate()
        .map(|(index, p)| TrajectoryRow {
            agent_id: result.id.0,
            role:     result.role.as_str(),
            mode:     result.mode.as_str(),
            segment:  if index < result.exploration_len { Segment::Explore } else { Segment::Homing },
            index,
            x:        p.x,
            y:        p.y,
        })
        .collect()
}
