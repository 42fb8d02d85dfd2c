//! Agent behaviors and the roster that sequences them.
//!
//! A behavior is a pure function of its [`AgentContext`] and RNG stream: it
//! returns an [`Act`] carrying the trajectory, the events to report, and
//! any [`Intent`]s for the orchestrator to apply.  Behaviors never hold a
//! mutable reference to shared memory.

use ap_core::{AgentId, AgentRng, AgentRole, Mode, Point2D, SimConfig};
use ap_path::{Walk, homing_path, random_walk};

use crate::{AgentResult, FallbackReason, Intent, SharedMemory, SimEvent};

// ── Context / output ──────────────────────────────────────────────────────────

/// Read-only view handed to a behavior while it acts.
pub struct AgentContext<'a> {
    pub id:     AgentId,
    pub role:   AgentRole,
    pub config: &'a SimConfig,
    pub memory: &'a SharedMemory,
}

/// What one agent did.
#[derive(Clone, Debug)]
pub struct Act {
    pub result:  AgentResult,
    pub events:  Vec<SimEvent>,
    pub intents: Vec<Intent>,
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// The decision procedure an agent runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Random walk, straight-line return to the nest, and (if `publish`) a
    /// nest → food trail written to shared memory.
    Explore { publish: bool },

    /// Replay the trail if one is present; otherwise a bare random walk with
    /// no return leg.
    FollowTrail,

    /// Replay the trail only if one is present and `sensor_fault` is unset;
    /// otherwise explore and return on its own.  The fault is independent of
    /// whether memory holds a trail.
    FollowTrailUnlessFaulted { sensor_fault: bool },
}

/// What to do when the trail cannot be used.
#[derive(Copy, Clone)]
enum Fallback {
    WalkOnly,
    RoundTrip,
}

impl Behavior {
    pub fn act(&self, ctx: &AgentContext<'_>, rng: &mut AgentRng) -> Act {
        match *self {
            Behavior::Explore { publish } => explore(ctx, rng, publish),
            Behavior::FollowTrail => follow_trail(ctx, rng, false, Fallback::WalkOnly),
            Behavior::FollowTrailUnlessFaulted { sensor_fault } => {
                follow_trail(ctx, rng, sensor_fault, Fallback::RoundTrip)
            }
        }
    }
}

fn explore(ctx: &AgentContext<'_>, rng: &mut AgentRng, publish: bool) -> Act {
    let mut events = vec![SimEvent::Searching { agent: ctx.id, role: ctx.role }];

    let (food, result) = round_trip(ctx, rng, Mode::Explored);
    events.push(SimEvent::FoodFound { agent: ctx.id, role: ctx.role, at: food });

    let mut intents = Vec::new();
    if publish {
        let trail = homing_path(Point2D::ORIGIN, food, ctx.config.homing_samples);
        intents.push(Intent::PublishTrail(trail));
    }

    Act { result, events, intents }
}

fn follow_trail(
    ctx:          &AgentContext<'_>,
    rng:          &mut AgentRng,
    sensor_fault: bool,
    fallback:     Fallback,
) -> Act {
    // One read per decision.
    let trail = ctx.memory.read();
    let mut events = vec![SimEvent::MemoryChecked {
        agent:     ctx.id,
        role:      ctx.role,
        available: trail.is_some(),
        sensor_fault,
    }];

    if let (Some(trail), false) = (trail, sensor_fault) {
        events.push(SimEvent::TrailFollowed {
            agent:  ctx.id,
            role:   ctx.role,
            points: trail.len(),
        });
        let result = AgentResult {
            id:              ctx.id,
            role:            ctx.role,
            mode:            Mode::DirectNavigation,
            path:            trail.path().clone(),
            exploration_len: 0,
            discovery:       None,
        };
        return Act { result, events, intents: Vec::new() };
    }

    let reason = if sensor_fault { FallbackReason::SensorFault } else { FallbackReason::MemoryEmpty };
    events.push(SimEvent::FallbackSearch { agent: ctx.id, role: ctx.role, reason });

    let result = match fallback {
        Fallback::WalkOnly => {
            let walk = random_walk(ctx.config.steps, ctx.config.step_size, rng);
            AgentResult {
                id:              ctx.id,
                role:            ctx.role,
                mode:            Mode::FallbackSearch,
                exploration_len: walk.path.len(),
                discovery:       Some(walk.discovery),
                path:            walk.path,
            }
        }
        Fallback::RoundTrip => round_trip(ctx, rng, Mode::FallbackSearch).1,
    };

    Act { result, events, intents: Vec::new() }
}

/// Fresh random walk plus a homing leg back to the nest.  Also returns the
/// walk's discovery point.
fn round_trip(ctx: &AgentContext<'_>, rng: &mut AgentRng, mode: Mode) -> (Point2D, AgentResult) {
    let Walk { mut path, discovery } =
        random_walk(ctx.config.steps, ctx.config.step_size, rng);
    let exploration_len = path.len();
    path.extend_from(homing_path(discovery, Point2D::ORIGIN, ctx.config.homing_samples).path());

    let result = AgentResult {
        id: ctx.id,
        role: ctx.role,
        mode,
        path,
        exploration_len,
        discovery: Some(discovery),
    };
    (discovery, result)
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// One roster entry: who the agent is and how it behaves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AgentSpec {
    pub role:     AgentRole,
    pub behavior: Behavior,
}

impl AgentSpec {
    pub fn new(role: AgentRole, behavior: Behavior) -> Self {
        Self { role, behavior }
    }

    /// Explores and publishes its trail.
    pub fn scout() -> Self {
        Self::new(AgentRole::Scout, Behavior::Explore { publish: true })
    }

    pub fn learner() -> Self {
        Self::new(AgentRole::Learner, Behavior::FollowTrail)
    }

    pub fn lost(sensor_fault: bool) -> Self {
        Self::new(AgentRole::Lost, Behavior::FollowTrailUnlessFaulted { sensor_fault })
    }
}

/// Scout, Learner, then a Lost agent whose sensor has failed.
pub fn default_roster() -> Vec<AgentSpec> {
    vec![AgentSpec::scout(), AgentSpec::learner(), AgentSpec::lost(true)]
}
