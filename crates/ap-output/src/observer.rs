//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ap_core::SimConfig;
use ap_sim::{AgentResult, RunOutcome, SimObserver};

use crate::playback::{Bounds, DEFAULT_PAD, Timeline};
use crate::row::{MarkerRow, RunSummaryRow, trajectory_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes trajectories, markers, and a run summary to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    steps:      usize,
    step_size:  f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`; `config` is recorded in the
    /// run summary.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            steps:      config.steps,
            step_size:  config.step_size,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_agent_finished(&mut self, result: &AgentResult) {
        let rows = trajectory_rows(result);
        let written = self.writer.write_trajectory(&rows);
        self.store_err(written);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        let mut markers = vec![MarkerRow { label: "nest", x: outcome.nest.x, y: outcome.nest.y }];
        if let Some(food) = outcome.food {
            markers.push(MarkerRow { label: "food", x: food.x, y: food.y });
        }
        let result = self.writer.write_markers(&markers);
        self.store_err(result);

        let bounds = Bounds::enclosing(outcome, DEFAULT_PAD);
        let summary = RunSummaryRow {
            seed:         outcome.seed,
            steps:        self.steps,
            step_size:    self.step_size,
            agents:       outcome.agents.len(),
            total_frames: Timeline::new(&outcome.agents).total_frames(),
            min_x:        bounds.min_x,
            max_x:        bounds.max_x,
            min_y:        bounds.min_y,
            max_y:        bounds.max_y,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
