//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trajectories.csv`
//! - `markers.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{MarkerRow, OutputResult, RunSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;

/// Writes run output to three CSV files.
pub struct CsvWriter {
    trajectories: Writer<File>,
    markers:      Writer<File>,
    summary:      Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectories = Writer::from_path(dir.join("trajectories.csv"))?;
        trajectories.write_record(["agent_id", "role", "mode", "segment", "index", "x", "y"])?;

        let mut markers = Writer::from_path(dir.join("markers.csv"))?;
        markers.write_record(["label", "x", "y"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "seed", "steps", "step_size", "agents", "total_frames",
            "min_x", "max_x", "min_y", "max_y",
        ])?;

        Ok(Self {
            trajectories,
            markers,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectories.write_record(&[
                row.agent_id.to_string(),
                row.role.to_owned(),
                row.mode.to_owned(),
                row.segment.as_str().to_owned(),
                row.index.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_markers(&mut self, rows: &[MarkerRow]) -> OutputResult<()> {
        for row in rows {
            self.markers.write_record(&[
                row.label.to_owned(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.seed.to_string(),
            row.steps.to_string(),
            row.step_size.to_string(),
            row.agents.to_string(),
            row.total_frames.to_string(),
            row.min_x.to_string(),
            row.max_x.to_string(),
            row.min_y.to_string(),
            row.max_y.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectories.flush()?;
        self.markers.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
