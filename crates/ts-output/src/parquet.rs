//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory, mirroring the CSV
//! backend's tables:
//! - `objects.parquet`
//! - `trajectories.parquet`
//! - `section_crossings.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{CrossingRow, ObjectRow, OutputResult, TrajectoryRow};

pub const OBJECTS_FILE: &str = "objects.parquet";
pub const TRAJECTORIES_FILE: &str = "trajectories.parquet";
pub const CROSSINGS_FILE: &str = "section_crossings.parquet";

fn object_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("object_id",    DataType::Utf8,    false),
        Field::new("speed",        DataType::Float64, false),
        Field::new("created_time", DataType::Int64,   false),
        Field::new("expire_time",  DataType::Int64,   false),
        Field::new("payload",      DataType::Utf8,    false),
    ]))
}

fn trajectory_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("object_id", DataType::Utf8,    false),
        Field::new("time",      DataType::Int64,   false),
        Field::new("x",         DataType::Float64, false),
        Field::new("y",         DataType::Float64, false),
        Field::new("heading",   DataType::Float64, true),
    ]))
}

fn crossing_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("section",  DataType::Utf8,  false),
        Field::new("id_index", DataType::Utf8,  false),
        Field::new("start",    DataType::Int64, false),
        Field::new("end",      DataType::Int64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes a fleet to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    objects:      Option<ArrowWriter<File>>,
    trajectories: Option<ArrowWriter<File>>,
    crossings:    Option<ArrowWriter<File>>,
    obj_schema:   Arc<Schema>,
    traj_schema:  Arc<Schema>,
    cross_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create the three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let obj_schema = object_schema();
        let traj_schema = trajectory_schema();
        let cross_schema = crossing_schema();

        Ok(Self {
            objects:      Some(open(dir, OBJECTS_FILE, &obj_schema)?),
            trajectories: Some(open(dir, TRAJECTORIES_FILE, &traj_schema)?),
            crossings:    Some(open(dir, CROSSINGS_FILE, &cross_schema)?),
            obj_schema,
            traj_schema,
            cross_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_object(&mut self, row: &ObjectRow<'_>) -> OutputResult<()> {
        let Some(writer) = self.objects.as_mut() else {
            return Ok(());
        };

        let mut ids      = StringBuilder::new();
        let mut speeds   = Float64Builder::new();
        let mut created  = Int64Builder::new();
        let mut expires  = Int64Builder::new();
        let mut payloads = StringBuilder::new();

        ids.append_value(row.object_id);
        speeds.append_value(row.speed);
        created.append_value(row.created_time);
        expires.append_value(row.expire_time);
        payloads.append_value(row.payload);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.obj_schema),
            vec![
                Arc::new(ids.finish()),
                Arc::new(speeds.finish()),
                Arc::new(created.finish()),
                Arc::new(expires.finish()),
                Arc::new(payloads.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_trajectory(&mut self, rows: &[TrajectoryRow<'_>]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.trajectories.as_mut() else {
            return Ok(());
        };

        let mut ids      = StringBuilder::new();
        let mut times    = Int64Builder::with_capacity(rows.len());
        let mut xs       = Float64Builder::with_capacity(rows.len());
        let mut ys       = Float64Builder::with_capacity(rows.len());
        let mut headings = Float64Builder::with_capacity(rows.len());

        for row in rows {
            ids.append_value(row.object_id);
            times.append_value(row.time);
            xs.append_value(row.x);
            ys.append_value(row.y);
            headings.append_option(row.heading);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.traj_schema),
            vec![
                Arc::new(ids.finish()),
                Arc::new(times.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(headings.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_crossings(&mut self, rows: &[CrossingRow<'_>]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.crossings.as_mut() else {
            return Ok(());
        };

        let mut sections  = StringBuilder::new();
        let mut id_index  = StringBuilder::new();
        let mut starts    = Int64Builder::with_capacity(rows.len());
        let mut ends      = Int64Builder::with_capacity(rows.len());

        for row in rows {
            sections.append_value(row.section.to_string());
            id_index.append_value(row.id_index());
            starts.append_value(row.start);
            ends.append_value(row.end);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.cross_schema),
            vec![
                Arc::new(sections.finish()),
                Arc::new(id_index.finish()),
                Arc::new(starts.finish()),
                Arc::new(ends.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        for slot in [&mut self.objects, &mut self.trajectories, &mut self.crossings] {
            if let Some(w) = slot.take() {
                w.close()?;
            }
        }
        Ok(())
    }
}
