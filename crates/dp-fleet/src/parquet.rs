//! Parquet fleet descriptor (feature `parquet`).
//!
//! Written to `<file>.tmp` and renamed over the target, like the CSV sink.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::sink::{replace_file, FleetSink, HEADER};
use crate::{FleetResult, VehicleSpecification};

fn fleet_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(HEADER[0], DataType::Utf8,    false),
        Field::new(HEADER[1], DataType::Utf8,    false),
        Field::new(HEADER[2], DataType::UInt32,  false),
        Field::new(HEADER[3], DataType::Float64, false),
        Field::new(HEADER[4], DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes the fleet to one Parquet file as a single record batch.
pub struct ParquetFleetSink {
    path: PathBuf,
}

impl ParquetFleetSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FleetSink for ParquetFleetSink {
    fn write_fleet(&mut self, vehicles: &[VehicleSpecification]) -> FleetResult<()> {
        let schema = fleet_schema();

        let mut ids        = StringBuilder::new();
        let mut links      = StringBuilder::new();
        let mut capacities = UInt32Builder::new();
        let mut begins     = Float64Builder::new();
        let mut ends       = Float64Builder::new();

        for v in vehicles {
            ids.append_value(v.id.as_str());
            links.append_value(v.start_link.as_str());
            capacities.append_value(v.capacity);
            begins.append_value(v.service_begin);
            ends.append_value(v.service_end);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&schema),
            vec![
                Arc::new(ids.finish()),
                Arc::new(links.finish()),
                Arc::new(capacities.finish()),
                Arc::new(begins.finish()),
                Arc::new(ends.finish()),
            ],
        )?;

        replace_file(&self.path, |tmp| {
            let file = File::create(tmp)?;
            let mut writer = ArrowWriter::try_new(file, schema, Some(snappy_props()))?;
            writer.write(&batch)?;
            writer.close()?;
            Ok(())
        })
    }
}
