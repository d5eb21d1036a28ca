//! Savings Core - savings goal models, operations, persistence and services.
//!
//! This crate contains the goal state logic of the savings tracker. It is
//! storage-agnostic: persistence goes through the [`storage::KeyValueSlot`]
//! trait, implemented in memory here and by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod storage;
pub mod transactions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
