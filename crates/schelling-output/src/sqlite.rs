//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `iteration_summaries` and `grid_snapshots`.  Both are dropped
//! and recreated on open, matching the CSV backend's truncation.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CellRow, IterationRow, OutputResult};

pub const DB_FILE: &str = "output.db";

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and recreate both tables, so a
    /// new run replaces any earlier run's rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS iteration_summaries;
             DROP TABLE IF EXISTS grid_snapshots;
             CREATE TABLE iteration_summaries (
                 iteration    INTEGER PRIMARY KEY,
                 unhappy      INTEGER NOT NULL,
                 relocated    INTEGER NOT NULL,
                 moved_agents INTEGER NOT NULL,
                 segregation  REAL    NOT NULL
             );
             CREATE TABLE grid_snapshots (
                 iteration INTEGER NOT NULL,
                 row       INTEGER NOT NULL,
                 col       INTEGER NOT NULL,
                 state     TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO iteration_summaries \
             (iteration, unhappy, relocated, moved_agents, segregation) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.iteration as i64,
                row.unhappy as i64,
                row.relocated as i64,
                row.moved_agents as i64,
                row.segregation,
            ],
        )?;
        Ok(())
    }

    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO grid_snapshots (iteration, row, col, state) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.iteration as i64, row.row, row.col, row.state])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
