use thiserror::Error;
use welds::errors::{ConnError, WeldsError};

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl From<WeldsError> for StoreError {
    fn from(error: WeldsError) -> Self {
        StoreError::DatabaseError(error.to_string())
    }
}

impl From<ConnError> for StoreError {
    fn from(error: ConnError) -> Self {
        StoreError::DatabaseError(error.to_string())
    }
}
