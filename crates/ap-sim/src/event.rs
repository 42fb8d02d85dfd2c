//! Status events emitted during a run, in the order they happen.

use ap_core::{AgentId, AgentRole, Mode, Point2D};

/// Why an agent searched instead of following the trail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// Nothing was published when the agent looked.
    MemoryEmpty,
    /// The agent's read failed, whether or not a trail existed.
    SensorFault,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    RunStarted {
        seed:      u64,
        steps:     usize,
        step_size: f64,
        agents:    usize,
    },
    Searching {
        agent: AgentId,
        role:  AgentRole,
    },
    FoodFound {
        agent: AgentId,
        role:  AgentRole,
        at:    Point2D,
    },
    TrailPublished {
        agent:  AgentId,
        role:   AgentRole,
        food:   Point2D,
        points: usize,
    },
    MemoryChecked {
        agent:        AgentId,
        role:         AgentRole,
        available:    bool,
        sensor_fault: bool,
    },
    TrailFollowed {
        agent:  AgentId,
        role:   AgentRole,
        points: usize,
    },
    FallbackSearch {
        agent:  AgentId,
        role:   AgentRole,
        reason: FallbackReason,
    },
    AgentFinished {
        agent:  AgentId,
        role:   AgentRole,
        mode:   Mode,
        points: usize,
    },
}

impl SimEvent {
    /// Short machine-readable tag.
    pub fn label(&self) -> &'static str {
        match self {
            SimEvent::RunStarted { .. }     => "run_started",
            SimEvent::Searching { .. }      => "searching",
            SimEvent::FoodFound { .. }      => "food_found",
            SimEvent::TrailPublished { .. } => "trail_published",
            SimEvent::MemoryChecked { .. }  => "memory_checked",
            SimEvent::TrailFollowed { .. }  => "trail_followed",
            SimEvent::FallbackSearch { .. } => "fallback_search",
            SimEvent::AgentFinished { .. }  => "agent_finished",
        }
    }

    /// The agent the event concerns; `None` for run-level events.
    pub fn role(&self) -> Option<AgentRole> {
        match self {
            SimEvent::RunStarted { .. } => None,
            SimEvent::Searching { role, .. }
            | SimEvent::FoodFound { role, .. }
            | SimEvent::TrailPublished { role, .. }
            | SimEvent::MemoryChecked { role, .. }
            | SimEvent::TrailFollowed { role, .. }
            | SimEvent::FallbackSearch { role, .. }
            | SimEvent::AgentFinished { role, .. } => Some(*role),
        }
    }
}
