//! SQLite storage implementation for the savings tracker.
//!
//! This crate provides the durable key-value slot used by `savings-core`:
//! - Database connection pooling and management
//! - Diesel migrations
//! - A [`KeyValueSlot`](savings_core::storage::KeyValueSlot) implementation over one table
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! The core is storage-agnostic and works with the slot trait.
//!
//! ```text
//!   core (goals, transactions)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod key_value;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, open, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::StorageError;

pub use key_value::SqliteKeyValueSlot;

// Re-export from savings-core for convenience
pub use savings_core::errors::{Error, PersistenceError, Result};
