use thiserror::Error;

use dp_core::PersonId;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("population parse error: {0}")]
    Parse(String),

    #[error("person {0} appears twice")]
    DuplicatePerson(PersonId),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
