//! SQLite-backed key-value slot.

mod model;
mod repository;

pub use model::StorageEntryDB;
pub use repository::SqliteKeyValueSlot;
