//! Core error types for the savings tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the savings tracker.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// independent of any particular key-value backend.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Backend-agnostic error type for the persistent key-value slot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The slot could not be opened or reached.
    #[error("Failed to open storage: {0}")]
    ConnectionFailed(String),

    /// Reading a key failed.
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed (e.g. quota exceeded, disk full).
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// The stored value exists but could not be decoded.
    #[error("Stored value for '{key}' is malformed: {message}")]
    Malformed { key: String, message: String },

    /// Storage schema migration failed.
    #[error("Storage migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
