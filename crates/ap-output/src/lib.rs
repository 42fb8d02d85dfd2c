//! `ap-output` — presentation handoff for antpath runs.
//!
//! Rendering lives outside this workspace.  This crate turns a
//! [`RunOutcome`][ap_sim::RunOutcome] into plain rows a plotting tool can
//! consume, plus the playback schedule and plot extent the animation needs.
//!
//! | Feature   | Backend     | Files created                                               |
//! |-----------|-------------|-------------------------------------------------------------|
//! | *(none)*  | CSV         | `trajectories.csv`, `markers.csv`, `run_summary.csv`        |
//! | `sqlite`  | SQLite      | `output.db`                                                 |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ap_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ap_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim.config);
//! let outcome = sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod playback;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use playback::{Bounds, Frame, Timeline};
pub use row::{MarkerRow, RunSummaryRow, Segment, TrajectoryRow, trajectory_rows};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
