//! `dp-fleet` — seeded DRT fleet synthesis.
//!
//! [`synthesize_fleet`] places N vehicles on links drawn uniformly (with
//! replacement) from the links allowing the configured mode, then hands the
//! ordered specifications to a [`FleetSink`].
//!
//! Three sinks are provided behind Cargo features:
//!
//! | Feature   | Sink                | Output                                   |
//! |-----------|---------------------|------------------------------------------|
//! | *(none)*  | [`CsvFleetSink`]    | one CSV file, written atomically         |
//! | `sqlite`  | `SqliteFleetSink`   | `vehicles` table in an SQLite database   |
//! | `parquet` | `ParquetFleetSink`  | one Parquet file, written atomically     |
//!
//! All sinks share the columns
//! `id, start_link, capacity, service_begin_time, service_end_time`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dp_core::FleetConfig;
//! use dp_fleet::write_fleet;
//!
//! let network = dp_network::load_network_csv("network.csv")?;
//! let summary = write_fleet(Path::new("fleet.csv"), &network, &FleetConfig::default())?;
//! println!("{} vehicles on {} links", summary.vehicles, summary.distinct_start_links);
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod sink;
pub mod synth;
pub mod vehicle;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use self::csv::CsvFleetSink;
pub use error::{FleetError, FleetResult};
pub use observer::{FleetObserver, FleetSummary, NoopFleetObserver};
pub use sink::{FleetSink, HEADER};
pub use synth::{synthesize_fleet, write_fleet};
pub use vehicle::VehicleSpecification;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteFleetSink;

#[cfg(feature = "parquet")]
pub use self::parquet::ParquetFleetSink;
