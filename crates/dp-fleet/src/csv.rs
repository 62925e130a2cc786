//! CSV fleet descriptor.
//!
//! The descriptor is first written to `<file>.tmp` next to the target and
//! then renamed over it, so readers never see a truncated fleet.

use std::path::{Path, PathBuf};

use csv::Writer;

use crate::sink::{replace_file, FleetSink, HEADER};
use crate::{FleetResult, VehicleSpecification};

/// Writes the fleet to one CSV file with a header row.
pub struct CsvFleetSink {
    path: PathBuf,
}

impl CsvFleetSink {
    /// Nothing is created until [`write_fleet`](FleetSink::write_fleet).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_records(path: &Path, vehicles: &[VehicleSpecification]) -> FleetResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(HEADER)?;
    for v in vehicles {
        w.write_record(&[
            v.id.to_string(),
            v.start_link.to_string(),
            v.capacity.to_string(),
            v.service_begin.to_string(),
            v.service_end.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

impl FleetSink for CsvFleetSink {
    fn write_fleet(&mut self, vehicles: &[VehicleSpecification]) -> FleetResult<()> {
        replace_file(&self.path, |tmp| write_records(tmp, vehicles))
    }
}
