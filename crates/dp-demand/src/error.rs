use thiserror::Error;

use dp_core::PrepError;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("demand configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(PrepError),
}

impl From<PrepError> for DemandError {
    fn from(e: PrepError) -> Self {
        match e {
            PrepError::Config(msg) => DemandError::Config(msg),
            other => DemandError::Core(other),
        }
    }
}

pub type DemandResult<T> = Result<T, DemandError>;
