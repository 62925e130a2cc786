//! The `FleetSink` trait implemented by all descriptor backends.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{FleetResult, VehicleSpecification};

/// Column names shared by every backend, in record order.
pub const HEADER: [&str; 5] = ["id", "start_link", "capacity", "service_begin_time", "service_end_time"];

/// Persists a complete, ordered fleet.
///
/// `write_fleet` is called once per synthesis run with every vehicle in index
/// order. Implementations replace whatever an earlier run left behind.
pub trait FleetSink {
    fn write_fleet(&mut self, vehicles: &[VehicleSpecification]) -> FleetResult<()>;
}

/// Collects the fleet in memory.
impl FleetSink for Vec<VehicleSpecification> {
    fn write_fleet(&mut self, vehicles: &[VehicleSpecification]) -> FleetResult<()> {
        self.clear();
        self.extend_from_slice(vehicles);
        Ok(())
    }
}

/// `<file>.tmp` next to `path`.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Run `write` against a temp file next to `path`, then rename it over
/// `path`.  On any error the temp file is removed and `path` is untouched.
pub(crate) fn replace_file<F>(path: &Path, write: F) -> FleetResult<()>
where
    F: FnOnce(&Path) -> FleetResult<()>,
{
    let tmp = temp_path(path);
    let result = write(&tmp).and_then(|()| fs::rename(&tmp, path).map_err(Into::into));
    if result.is_err() {
        // Ignored: the temp file may never have been created.
        let _ = fs::remove_file(&tmp);
    }
    result
}
