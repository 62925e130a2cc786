//! Network error type.

use thiserror::Error;

use dp_core::LinkId;

/// Errors produced by `dp-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network parse error: {0}")]
    Parse(String),

    #[error("link {0} defined twice")]
    DuplicateLink(LinkId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
