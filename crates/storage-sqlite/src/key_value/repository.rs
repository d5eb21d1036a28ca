use chrono::Utc;
use diesel::prelude::*;
use log::{debug, error};
use std::sync::Arc;

use super::model::StorageEntryDB;
use crate::db::{get_connection, DbPool};
use crate::schema::app_storage::dsl::*;
use savings_core::errors::{PersistenceError, Result};
use savings_core::storage::KeyValueSlot;

/// Key-value slot persisted in the `app_storage` table.
pub struct SqliteKeyValueSlot {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueSlot {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueSlot { pool }
    }
}

fn read_failed(key: &str, err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::ReadFailed {
        key: key.to_string(),
        message: err.to_string(),
    }
}

fn write_failed(key: &str, err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::WriteFailed {
        key: key.to_string(),
        message: err.to_string(),
    }
}

impl KeyValueSlot for SqliteKeyValueSlot {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = app_storage
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(|e| {
                error!("Failed to read storage key '{}': {}", key, e);
                read_failed(key, e)
            })?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let entry = StorageEntryDB {
            storage_key: key.to_string(),
            storage_value: value.to_string(),
            updated_at: Utc::now().naive_utc(),
        };
        diesel::replace_into(app_storage)
            .values(&entry)
            .execute(&mut conn)
            .map_err(|e| {
                error!("Failed to write storage key '{}': {}", key, e);
                write_failed(key, e)
            })?;
        debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(app_storage.filter(storage_key.eq(key)))
            .execute(&mut conn)
            .map_err(|e| write_failed(key, e))?;
        Ok(())
    }
}
