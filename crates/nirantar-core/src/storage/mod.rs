//! Local persistence: a namespaced JSON layer over a key-value backend.
//!
//! Keys are written as `<namespace>-<key>`, so with the default namespace the
//! durable layout is:
//!
//! | key                        | value                          |
//! |----------------------------|--------------------------------|
//! | `nirantar-language`        | language tag (`en` / `hi`)     |
//! | `nirantar-last-sync`       | RFC 3339 timestamp             |
//! | `nirantar-help-requests`   | JSON array of help requests    |

mod memory;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub use memory::MemoryKeyValueStore;

/// Default key namespace
pub const DEFAULT_NAMESPACE: &str = "nirantar";

/// Storage key for the UI language tag
pub const LANGUAGE_KEY: &str = "language";
/// Storage key for the last completed sync timestamp
pub const LAST_SYNC_KEY: &str = "last-sync";
/// Storage key for the help request collection
pub const HELP_REQUESTS_KEY: &str = "help-requests";

/// Durable string key-value storage.
///
/// Mirrors browser local storage: synchronous, string values, no
/// transactions across keys.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` if present
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Namespaced offline store shared by every service.
#[derive(Clone)]
pub struct OfflineStore {
    backend: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl OfflineStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    /// In-memory store under the default namespace (tests, dry runs)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::default()), DEFAULT_NAMESPACE)
    }

    /// Full backend key for a logical key
    pub fn storage_key(&self, key: &str) -> String {
        format!("{}-{}", self.namespace, key)
    }

    /// Serialize `value` as JSON and write it under the namespaced key.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let serialized = serde_json::to_string(value)?;
        self.backend.set_item(&self.storage_key(key), &serialized)?;
        tracing::debug!("Data saved offline: {}", key);
        Ok(())
    }

    /// Read and deserialize the JSON value under the namespaced key.
    ///
    /// Absent keys yield `Ok(None)`; corrupt content is an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get_item(&self.storage_key(key))? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Like [`Self::load`], but any storage or decoding failure degrades to
    /// `None` after logging a warning.
    pub fn load_or_none<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.load(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("Failed to retrieve offline data '{}': {}", key, error);
                None
            }
        }
    }

    /// Write a bare string (no JSON encoding).
    pub fn save_text(&self, key: &str, value: &str) -> Result<()> {
        self.backend.set_item(&self.storage_key(key), value)
    }

    /// Read a bare string (no JSON decoding).
    pub fn load_text(&self, key: &str) -> Result<Option<String>> {
        self.backend.get_item(&self.storage_key(key))
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove_item(&self.storage_key(key))
    }
}
