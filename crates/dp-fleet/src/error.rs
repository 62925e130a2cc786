//! Error types for dp-fleet.

use dp_core::{Mode, PrepError};
use thiserror::Error;

/// Errors that can occur while synthesizing or persisting a fleet.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet configuration error: {0}")]
    Config(String),

    /// Vehicles were requested but no link allows the placement mode.
    #[error("no link allows mode \"{mode}\"; cannot place vehicles")]
    NoEligibleLinks { mode: Mode },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

impl FleetError {
    /// `true` for errors raised before anything was written.
    pub fn is_config(&self) -> bool {
        matches!(self, FleetError::Config(_) | FleetError::NoEligibleLinks { .. })
    }
}

impl From<PrepError> for FleetError {
    fn from(e: PrepError) -> Self {
        match e {
            PrepError::Config(msg) | PrepError::Parse(msg) => FleetError::Config(msg),
            PrepError::Io(e) => FleetError::Io(e),
        }
    }
}

/// Alias for `Result<T, FleetError>`.
pub type FleetResult<T> = Result<T, FleetError>;
