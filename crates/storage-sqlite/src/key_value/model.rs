use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for one stored key-value entry
#[derive(Queryable, Insertable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::app_storage)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StorageEntryDB {
    pub storage_key: String,
    pub storage_value: String,
    pub updated_at: NaiveDateTime,
}
