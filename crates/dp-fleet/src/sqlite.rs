//! SQLite fleet descriptor (feature `sqlite`).
//!
//! Stores the fleet in a `vehicles` table.  Each write replaces the previous
//! contents inside one transaction.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::sink::FleetSink;
use crate::{FleetResult, VehicleSpecification};

const SCHEMA: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous  = NORMAL;
    CREATE TABLE IF NOT EXISTS vehicles (
        id                 TEXT    PRIMARY KEY,
        start_link         TEXT    NOT NULL,
        capacity           INTEGER NOT NULL,
        service_begin_time REAL    NOT NULL,
        service_end_time   REAL    NOT NULL
    );";

/// Writes the fleet to an SQLite database.
pub struct SqliteFleetSink {
    path: Option<PathBuf>,
    conn: Option<Connection>,
}

impl SqliteFleetSink {
    /// The database at `path` is opened (or created) on the first
    /// [`write_fleet`](FleetSink::write_fleet), so a run that fails before
    /// persisting leaves no file behind.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), conn: None }
    }

    /// Use an already-open connection (e.g. `Connection::open_in_memory()`).
    pub fn from_connection(conn: Connection) -> FleetResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { path: None, conn: Some(conn) })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// `None` until the database has been opened.
    pub fn connection(&self) -> Option<&Connection> {
        self.conn.as_ref()
    }

    fn open(&mut self) -> FleetResult<&mut Connection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = match &self.path {
                    Some(path) => Connection::open(path)?,
                    None => Connection::open_in_memory()?,
                };
                conn.execute_batch(SCHEMA)?;
                conn
            }
        };
        Ok(self.conn.insert(conn))
    }
}

impl FleetSink for SqliteFleetSink {
    fn write_fleet(&mut self, vehicles: &[VehicleSpecification]) -> FleetResult<()> {
        let tx = self.open()?.transaction()?;
        tx.execute("DELETE FROM vehicles", [])?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vehicles \
                 (id, start_link, capacity, service_begin_time, service_end_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for v in vehicles {
                stmt.execute(rusqlite::params![
                    v.id.as_str(),
                    v.start_link.as_str(),
                    v.capacity,
                    v.service_begin,
                    v.service_end,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
