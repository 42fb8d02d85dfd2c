//! Effects an agent asks the orchestrator to apply after it acts.

use ap_core::HomingVector;

#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Write `trail` to shared memory (overwriting any earlier trail).
    PublishTrail(HomingVector),
}
