//! Seedable per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent draws from its own `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs across the seed space.  As a result:
//!
//! - Two agents never share a stream, so the Lost agent's walk is independent
//!   of the Scout's even though both run from the same seed.
//! - The same run seed always reproduces the same discovery point and paths.
//! - Appending an agent to the roster does not disturb earlier agents' draws.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// A heading drawn uniformly from `[0, 2π)`.
    #[inline]
    pub fn heading(&mut self) -> f64 {
        self.0.gen_range(0.0..TAU)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG root.  Holds the resolved seed and hands out agent streams.
#[derive(Copy, Clone, Debug)]
pub struct SimRng {
    seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed }
    }

    /// Seed from OS entropy.  The drawn seed is retained so the run can be
    /// replayed with [`SimRng::new`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Use `seed` if given, otherwise draw one from OS entropy.
    pub fn resolve(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The independent stream for `agent`.
    pub fn agent(&self, agent: AgentId) -> AgentRng {
        AgentRng::new(self.seed, agent)
    }
}
