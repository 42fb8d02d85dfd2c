//! The `Sim` struct and its agent loop.

use ap_core::{AgentId, Point2D, SimConfig, SimRng};
use tracing::{debug, info_span};

use crate::{
    AgentContext, AgentSpec, Intent, LogObserver, RunOutcome, SharedMemory, SimBuilder,
    SimEvent, SimObserver, SimResult,
};

/// The colony runner.
///
/// Agents act strictly one after another in roster order.  Each agent's
/// intents are applied before the next agent acts, so a trail published by
/// an earlier agent is visible to every later one.
///
/// Create via [`SimBuilder`].
pub struct Sim {
    pub config: SimConfig,

    /// Agents in execution order.  `AgentId(i)` is `roster[i]`.
    pub roster: Vec<AgentSpec>,

    /// Trail memory as left by the most recent run.
    pub memory: SharedMemory,

    pub(crate) rng: SimRng,
}

impl Sim {
    /// The resolved run seed.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Run every agent once and collect their trajectories.
    ///
    /// Memory starts empty and every agent's RNG stream is re-derived from
    /// the seed, so repeated calls return identical outcomes.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        self.memory = SharedMemory::empty();

        observer.on_event(&SimEvent::RunStarted {
            seed:      self.rng.seed(),
            steps:     self.config.steps,
            step_size: self.config.step_size,
            agents:    self.roster.len(),
        });

        // Explicit field borrows so the borrow checker sees disjoint access.
        let config = &self.config;
        let memory = &mut self.memory;
        let rng    = self.rng;

        let mut agents = Vec::with_capacity(self.roster.len());
        let mut food: Option<Point2D> = None;

        for (i, spec) in self.roster.iter().enumerate() {
            let id = AgentId(i as u32);
            let _span = info_span!("agent", id = id.0, role = %spec.role).entered();

            // ── Act (read-only) ───────────────────────────────────────────
            let mut agent_rng = rng.agent(id);
            let ctx = AgentContext { id, role: spec.role, config, memory: &*memory };
            let act = spec.behavior.act(&ctx, &mut agent_rng);

            for event in &act.events {
                observer.on_event(event);
            }

            // ── Apply ─────────────────────────────────────────────────────
            for intent in act.intents {
                match intent {
                    Intent::PublishTrail(trail) => {
                        debug!(points = trail.len(), "applying PublishTrail");
                        let event = SimEvent::TrailPublished {
                            agent:  id,
                            role:   spec.role,
                            food:   trail.end(),
                            points: trail.len(),
                        };
                        if food.is_none() {
                            food = Some(trail.end());
                        }
                        memory.publish(trail);
                        observer.on_event(&event);
                    }
                }
            }

            let result = act.result;
            observer.on_event(&SimEvent::AgentFinished {
                agent:  id,
                role:   spec.role,
                mode:   result.mode,
                points: result.path.len(),
            });
            observer.on_agent_finished(&result);
            agents.push(result);
        }

        let food = food.or_else(|| agents.iter().find_map(|a| a.discovery));
        let outcome = RunOutcome {
            seed: rng.seed(),
            nest: Point2D::ORIGIN,
            food,
            agents,
        };
        observer.on_run_end(&outcome);
        outcome
    }
}

/// Run the default three-agent scenario with `steps` and `step_size`,
/// logging status lines through `tracing`.
pub fn run_colony(steps: usize, step_size: f64) -> SimResult<RunOutcome> {
    let config = SimConfig { steps, step_size, ..SimConfig::default() };
    let mut sim = SimBuilder::new(config).build()?;
    Ok(sim.run(&mut LogObserver))
}
