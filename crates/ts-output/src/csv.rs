//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `objects.csv`
//! - `trajectories.csv`
//! - `section_crossings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CrossingRow, ObjectRow, OutputResult, TrajectoryRow};

pub const OBJECTS_FILE: &str = "objects.csv";
pub const TRAJECTORIES_FILE: &str = "trajectories.csv";
pub const CROSSINGS_FILE: &str = "section_crossings.csv";

/// Writes a fleet to three CSV files.
pub struct CsvWriter {
    objects:      Writer<File>,
    trajectories: Writer<File>,
    crossings:    Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut objects = Writer::from_path(dir.join(OBJECTS_FILE))?;
        objects.write_record(["object_id", "speed", "created_time", "expire_time", "payload"])?;

        let mut trajectories = Writer::from_path(dir.join(TRAJECTORIES_FILE))?;
        trajectories.write_record(["object_id", "time", "x", "y", "heading"])?;

        let mut crossings = Writer::from_path(dir.join(CROSSINGS_FILE))?;
        crossings.write_record(["section", "id_index", "start", "end"])?;

        Ok(Self {
            objects,
            trajectories,
            crossings,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_object(&mut self, row: &ObjectRow<'_>) -> OutputResult<()> {
        self.objects.write_record(&[
            row.object_id.to_owned(),
            row.speed.to_string(),
            row.created_time.to_string(),
            row.expire_time.to_string(),
            row.payload.to_owned(),
        ])?;
        Ok(())
    }

    fn write_trajectory(&mut self, rows: &[TrajectoryRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.trajectories.write_record(&[
                row.object_id.to_owned(),
                row.time.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.map(|h| h.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_crossings(&mut self, rows: &[CrossingRow<'_>]) -> OutputResult<()> {
        for row in rows {
            self.crossings.write_record(&[
                row.section.to_string(),
                row.id_index(),
                row.start.to_string(),
                row.end.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.objects.flush()?;
        self.trajectories.flush()?;
        self.crossings.flush()?;
        Ok(())
    }
}
