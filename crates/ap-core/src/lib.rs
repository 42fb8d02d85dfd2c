//! `ap-core` — foundational types for the `antpath` colony simulation.
//!
//! This crate is a dependency of every other `ap-*` crate.  It has no `ap-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point2D`                                             |
//! | [`trajectory`]  | `Trajectory`, `HomingVector`                          |
//! | [`ids`]         | `AgentId`, `AgentRole`, `Mode`                        |
//! | [`config`]      | `SimConfig`                                           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod trajectory;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point2D;
pub use ids::{AgentId, AgentRole, Mode};
pub use rng::{AgentRng, SimRng};
pub use trajectory::{HomingVector, Trajectory};
