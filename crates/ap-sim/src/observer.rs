//! Run observer trait for status reporting and data collection.

use tracing::{info, warn};

use crate::{AgentResult, FallbackReason, RunOutcome, SimEvent};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the run progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — counting fallbacks
///
/// ```rust,ignore
/// struct FallbackCounter(usize);
///
/// impl SimObserver for FallbackCounter {
///     fn on_event(&mut self, event: &SimEvent) {
///         if matches!(event, SimEvent::FallbackSearch { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every status event, in the order events occur.
    fn on_event(&mut self, _event: &SimEvent) {}

    /// Called once per agent after its intents have been applied.
    fn on_agent_finished(&mut self, _result: &AgentResult) {}

    /// Called once after the last agent finishes.
    fn on_run_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fan out to two observers, `0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_event(&mut self, event: &SimEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn on_agent_finished(&mut self, result: &AgentResult) {
        self.0.on_agent_finished(result);
        self.1.on_agent_finished(result);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        self.0.on_run_end(outcome);
        self.1.on_run_end(outcome);
    }
}

// ── Recorder ──────────────────────────────────────────────────────────────────

/// Keeps every event and finished result in memory.
#[derive(Default)]
pub struct Recorder {
    pub events:   Vec<SimEvent>,
    pub finished: Vec<AgentResult>,
    pub runs:     usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event labels in order, for compact assertions.
    pub fn labels(&self) -> Vec<&'static str> {
        self.events.iter().map(SimEvent::label).collect()
    }
}

impl SimObserver for Recorder {
    fn on_event(&mut self, event: &SimEvent) {
        self.events.push(event.clone());
    }

    fn on_agent_finished(&mut self, result: &AgentResult) {
        self.finished.push(result.clone());
    }

    fn on_run_end(&mut self, _outcome: &RunOutcome) {
        self.runs += 1;
    }
}

// ── LogObserver ───────────────────────────────────────────────────────────────

/// Renders events as human-readable `tracing` status lines.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_event(&mut self, event: &SimEvent) {
        match event {
            SimEvent::RunStarted { seed, steps, step_size, agents } => {
                info!(seed, steps, step_size, agents, "initializing colony simulation");
            }
            SimEvent::Searching { role, .. } => {
                info!("{role}: scouting...");
            }
            SimEvent::FoodFound { role, at, .. } => {
                info!("{role}: food found at {at}");
            }
            SimEvent::TrailPublished { role, points, .. } => {
                info!("{role}: path saved to shared memory ({points} points)");
            }
            SimEvent::MemoryChecked { role, .. } => {
                info!("{role}: checking memory...");
            }
            SimEvent::TrailFollowed { role, .. } => {
                info!("{role}: trail found, executing one-shot direct path");
            }
            SimEvent::FallbackSearch { role, reason: FallbackReason::SensorFault, .. } => {
                warn!("{role}: read failed, forced to stochastic search");
            }
            SimEvent::FallbackSearch { role, reason: FallbackReason::MemoryEmpty, .. } => {
                info!("{role}: no trail in memory, falling back to stochastic search");
            }
            SimEvent::AgentFinished { role, mode, points, .. } => {
                info!("{role}: done ({mode}, {points} points)");
            }
        }
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        match outcome.food {
            Some(food) => info!(
                seed = outcome.seed,
                total_points = outcome.total_points(),
                "run complete, food at {food}"
            ),
            None => info!(seed = outcome.seed, total_points = outcome.total_points(), "run complete"),
        }
    }
}
