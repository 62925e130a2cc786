//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `PrepError` into them
//! via `From` impls, so configuration validation can be reused with `?`.

use thiserror::Error;

/// The base error type for `dp-core` and a common source for sub-crates.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `dp-*` crates.
pub type PrepResult<T> = Result<T, PrepError>;
