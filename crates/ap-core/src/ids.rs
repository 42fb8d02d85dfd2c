//! Agent identity and result tags.

use std::fmt;

/// Position of an agent in the run's roster.  Also the key for deriving the
/// agent's RNG stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}

/// Which part an agent plays in the colony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentRole {
    /// Explores, finds food, and lays the trail.
    Scout,
    /// Follows the trail on its first attempt.
    Learner,
    /// Cannot read the trail and has to search on its own.
    Lost,
}

impl AgentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentRole::Scout   => "Scout",
            AgentRole::Learner => "Learner",
            AgentRole::Lost    => "Lost",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an agent's trajectory came about.  Renderers key line styles on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Random walk followed by a homing leg; the trail was derived from it.
    Explored,
    /// Trail replayed verbatim from shared memory.
    DirectNavigation,
    /// Memory unavailable; the agent searched stochastically.
    FallbackSearch,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Explored         => "explored",
            Mode::DirectNavigation => "direct_navigation",
            Mode::FallbackSearch   => "fallback_search",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
