use crate::errors::Result;

/// A durable string-keyed storage location.
///
/// Writes replace any prior value under the key. Implementations report
/// backend failures as [`crate::errors::PersistenceError`].
pub trait KeyValueSlot: Send + Sync {
    /// Reads the value stored under `key`, or `None` if nothing was stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing the previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
