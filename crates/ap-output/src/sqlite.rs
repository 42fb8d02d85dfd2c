//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `trajectories`, `markers`, and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::{MarkerRow, OutputResult, RunSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trajectories (
                 agent_id INTEGER NOT NULL,
                 role     TEXT    NOT NULL,
                 mode     TEXT    NOT NULL,
                 segment  TEXT    NOT NULL,
                 idx      INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS markers (
                 label TEXT NOT NULL,
                 x     REAL NOT NULL,
                 y     REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 seed         TEXT    NOT NULL,
                 steps        INTEGER NOT NULL,
                 step_size    REAL    NOT NULL,
                 agents       INTEGER NOT NULL,
                 total_frames INTEGER NOT NULL,
                 min_x        REAL    NOT NULL,
                 max_x        REAL    NOT NULL,
                 min_y        REAL    NOT NULL,
                 max_y        REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trajectories (agent_id, role, mode, segment, idx, x, y) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.role,
                    row.mode,
                    row.segment.as_str(),
                    row.index as i64,
                    row.x,
                    row.y,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_markers(&mut self, rows: &[MarkerRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT INTO markers (label, x, y) VALUES (?1, ?2, ?3)",
                rusqlite::params![row.label, row.x, row.y],
            )?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        // Seeds span the full u64 range; SQLite integers are i64.
        self.conn.execute(
            "INSERT INTO run_summary \
             (seed, steps, step_size, agents, total_frames, min_x, max_x, min_y, max_y) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.seed.to_string(),
                row.steps as i64,
                row.step_size,
                row.agents as i64,
                row.total_frames as i64,
                row.min_x,
                row.max_x,
                row.min_y,
                row.max_y,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
