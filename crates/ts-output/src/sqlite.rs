//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `tracks.db` file in the configured output directory using
//! a table-per-object layout:
//!
//! | Table               | Columns                                                |
//! |---------------------|--------------------------------------------------------|
//! | `"<id>_trajectory"` | `time` (PK), `x`, `y`, `heading` (NULL on first state) |
//! | `"<id>_data"`       | `speed`, `created_time`, `expire_time`, `payload`      |
//! | `A` … `D`           | `id_index` (PK, `"<id>_<ordinal>"`), `start`, `end`    |

use std::path::Path;

use rusqlite::Connection;
use ts_core::Section;

use crate::writer::OutputWriter;
use crate::{CrossingRow, ObjectRow, OutputResult, TrajectoryRow};

pub const DB_FILE: &str = "tracks.db";

/// Writes a fleet to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

/// Double-quote an identifier, doubling any embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn trajectory_table(object_id: &str) -> String {
    quote_ident(&format!("{object_id}_trajectory"))
}

fn data_table(object_id: &str) -> String {
    quote_ident(&format!("{object_id}_data"))
}

impl SqliteWriter {
    /// Open (or create) `tracks.db` in `dir` and create the section tables.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        for section in Section::ALL {
            conn.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {} (
                     id_index TEXT PRIMARY KEY,
                     start    INTEGER NOT NULL,
                     \"end\"  INTEGER NOT NULL
                 );",
                quote_ident(&section.to_string())
            ))?;
        }

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_object(&mut self, row: &ObjectRow<'_>) -> OutputResult<()> {
        let traj = trajectory_table(row.object_id);
        let data = data_table(row.object_id);

        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {traj} (
                 time    INTEGER PRIMARY KEY,
                 x       REAL NOT NULL,
                 y       REAL NOT NULL,
                 heading REAL NULL
             );
             CREATE TABLE IF NOT EXISTS {data} (
                 speed        REAL NOT NULL,
                 created_time INTEGER NOT NULL,
                 expire_time  INTEGER NOT NULL,
                 payload      TEXT NOT NULL
             );"
        ))?;
        tx.execute(
            &format!(
                "INSERT INTO {data} (speed, created_time, expire_time, payload) \
                 VALUES (?1, ?2, ?3, ?4)"
            ),
            rusqlite::params![row.speed, row.created_time, row.expire_time, row.payload],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn write_trajectory(&mut self, rows: &[TrajectoryRow<'_>]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        for row in rows {
            // Cached per table name; one object's rows reuse a single statement.
            let mut stmt = tx.prepare_cached(&format!(
                "INSERT INTO {} (time, x, y, heading) VALUES (?1, ?2, ?3, ?4)",
                trajectory_table(row.object_id)
            ))?;
            stmt.execute(rusqlite::params![row.time, row.x, row.y, row.heading])?;
        }
        tx.commit()?;
        Ok(())
    }

    fn write_crossings(&mut self, rows: &[CrossingRow<'_>]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        for row in rows {
            let mut stmt = tx.prepare_cached(&format!(
                "INSERT INTO {} (id_index, start, \"end\") VALUES (?1, ?2, ?3)",
                quote_ident(&row.section.to_string())
            ))?;
            stmt.execute(rusqlite::params![row.id_index(), row.start, row.end])?;
        }
        tx.commit()?;
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
