//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MarkerRow, OutputResult, RunSummaryRow, TrajectoryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write all points of one agent's trajectory.
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write the nest / food markers.
    fn write_markers(&mut self, rows: &[MarkerRow]) -> OutputResult<()>;

    /// Write the per-run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
