use thiserror::Error;

use crate::domain::StoreError;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("seed data rejected: {0}")]
    Seed(String),
}
