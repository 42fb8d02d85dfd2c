//! Run configuration.

use crate::{CoreError, CoreResult};

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Random-walk steps per exploration.
    pub steps: usize,

    /// Distance covered by each random-walk step.
    pub step_size: f64,

    /// Points in every homing vector (return legs and the published trail).
    pub homing_samples: usize,

    /// Run seed.  `None` draws one from OS entropy when the sim is built; the
    /// resolved seed is reported on the run outcome.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub const DEFAULT_STEPS:          usize = 150;
    pub const DEFAULT_STEP_SIZE:      f64   = 1.0;
    pub const DEFAULT_HOMING_SAMPLES: usize = 50;

    /// Default parameters with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Reject values no generator can turn into finite coordinates.
    ///
    /// Zero steps and zero or one homing samples are accepted: they produce
    /// single-point trajectories rather than errors.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.step_size.is_finite() {
            return Err(CoreError::Config(format!(
                "step_size must be finite, got {}",
                self.step_size
            )));
        }
        Ok(())
    }

    /// Length of an explore-and-return trajectory: walk plus homing leg.
    #[inline]
    pub fn round_trip_len(&self) -> usize {
        self.steps + 1 + self.homing_samples.max(1)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            steps:          Self::DEFAULT_STEPS,
            step_size:      Self::DEFAULT_STEP_SIZE,
            homing_samples: Self::DEFAULT_HOMING_SAMPLES,
            seed:           None,
        }
    }
}
