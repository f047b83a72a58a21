//! `SQLite`-backed key-value store

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

/// Durable key-value store over a local `SQLite` file.
///
/// The connection sits behind a mutex so the store can be shared between
/// the connectivity tracker and the repository.
pub struct SqliteKeyValueStore {
    db: Mutex<Database>,
}

impl SqliteKeyValueStore {
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Database>> {
        self.db
            .lock()
            .map_err(|_| Error::Storage("local store lock poisoned".to_string()))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let db = self.lock()?;
        let value = db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let db = self.lock()?;
        db.connection().execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let db = self.lock()?;
        db.connection()
            .execute("DELETE FROM kv_store WHERE key = ?", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_remove() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();

        assert_eq!(store.get_item("nirantar-language").unwrap(), None);

        store.set_item("nirantar-language", "hi").unwrap();
        assert_eq!(
            store.get_item("nirantar-language").unwrap().as_deref(),
            Some("hi")
        );

        store.set_item("nirantar-language", "en").unwrap();
        assert_eq!(
            store.get_item("nirantar-language").unwrap().as_deref(),
            Some("en")
        );

        store.remove_item("nirantar-language").unwrap();
        assert_eq!(store.get_item("nirantar-language").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nirantar.db");

        {
            let store = SqliteKeyValueStore::open(&path).unwrap();
            store.set_item("nirantar-last-sync", "2026-01-01T00:00:00Z").unwrap();
        }

        let store = SqliteKeyValueStore::open(&path).unwrap();
        assert_eq!(
            store.get_item("nirantar-last-sync").unwrap().as_deref(),
            Some("2026-01-01T00:00:00Z")
        );
    }
}
