//! Persistent key-value slot abstraction.
//!
//! The core only knows about string keys mapped to string values. Backends
//! (SQLite in `savings-storage-sqlite`, memory here) implement [`KeyValueSlot`].

mod memory;
mod storage_traits;

pub use memory::InMemorySlot;
pub use storage_traits::KeyValueSlot;
