//! `ap-sim` — colony orchestrator for the antpath simulation.
//!
//! # Per-agent two-phase loop
//!
//! ```text
//! reset SharedMemory to empty
//! for (id, spec) in roster:
//!   ① Act    — spec.behavior.act(&AgentContext, &mut AgentRng)
//!              reads the trail at most once, never writes it
//!   ② Events — forward the act's events to the observer in order
//!   ③ Apply  — PublishTrail(v) → SharedMemory::publish(v)
//!   ④ Finish — AgentFinished event, on_agent_finished(result)
//! ```
//!
//! Acts never mutate the memory, so the only write is the apply step right
//! after the Scout finishes, and every later agent sees it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ap_core::SimConfig;
//! use ap_sim::{LogObserver, SimBuilder, default_roster};
//!
//! let mut sim = SimBuilder::new(SimConfig::seeded(42))
//!     .roster(default_roster())
//!     .build()?;
//! let outcome = sim.run(&mut LogObserver);
//! ```

pub mod behavior;
pub mod builder;
pub mod error;
pub mod event;
pub mod intent;
pub mod memory;
pub mod observer;
pub mod result;
pub mod sim;

#[cfg(test)]
mod tests;

pub use behavior::{Act, AgentContext, AgentSpec, Behavior, default_roster};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{FallbackReason, SimEvent};
pub use intent::Intent;
pub use memory::SharedMemory;
pub use observer::{LogObserver, NoopObserver, Recorder, SimObserver};
pub use result::{AgentResult, RunOutcome};
pub use sim::{Sim, run_colony};
