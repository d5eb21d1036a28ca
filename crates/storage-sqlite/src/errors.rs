//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the backend-agnostic error types defined in `savings_core`.

use diesel::result::Error as DieselError;
use thiserror::Error;
use savings_core::errors::{Error, PersistenceError};

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `savings_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Persistence(PersistenceError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Persistence(PersistenceError::ConnectionFailed(e.to_string()))
            }
            StorageError::QueryFailed(e) => {
                Error::Persistence(PersistenceError::Internal(e.to_string()))
            }
            StorageError::MigrationFailed(e) => {
                Error::Persistence(PersistenceError::MigrationFailed(e))
            }
            StorageError::Io(e) => Error::Persistence(PersistenceError::Internal(e.to_string())),
        }
    }
}
