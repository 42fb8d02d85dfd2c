//! Fluent builder for constructing a [`Sim`].

use ap_core::{SimConfig, SimRng};

use crate::{AgentSpec, SimError, SimResult, default_roster};
use crate::memory::SharedMemory;
use crate::sim::Sim;

/// Fluent builder for [`Sim`].
///
/// | Method        | Default                     |
/// |---------------|-----------------------------|
/// | `.roster(v)`  | [`default_roster()`]        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::seeded(7))
///     .roster(vec![AgentSpec::scout(), AgentSpec::lost(false)])
///     .build()?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    roster: Option<Vec<AgentSpec>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, roster: None }
    }

    /// Supply the ordered list of agents to run.
    pub fn roster(mut self, roster: Vec<AgentSpec>) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Validate inputs, resolve the seed, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let roster = self.roster.unwrap_or_else(default_roster);
        if roster.is_empty() {
            return Err(SimError::EmptyRoster);
        }
        if u32::try_from(roster.len()).is_err() {
            return Err(SimError::Config(format!("roster of {} agents is too large", roster.len())));
        }

        Ok(Sim {
            rng:    SimRng::resolve(self.config.seed),
            config: self.config,
            roster,
            memory: SharedMemory::empty(),
        })
    }
}
