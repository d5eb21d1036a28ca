use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::KeyValueSlot;
use crate::errors::{PersistenceError, Result};

/// Process-local slot, used for tests and ephemeral sessions.
///
/// Clones share the same underlying map. Writes can be made to fail on demand
/// to exercise quota-exceeded style failures.
#[derive(Clone, Default)]
pub struct InMemorySlot {
    items: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with a raw value, as if written by an earlier session.
    pub fn with_item(key: &str, value: &str) -> Self {
        let slot = Self::new();
        slot.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        slot
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap_or_else(PoisonError::into_inner) = fail;
    }

    /// Returns the raw stored value without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueSlot for InMemorySlot {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.fail_writes.lock().unwrap_or_else(PoisonError::into_inner) {
            return Err(PersistenceError::WriteFailed {
                key: key.to_string(),
                message: "storage quota exceeded".to_string(),
            }
            .into());
        }
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
