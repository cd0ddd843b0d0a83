//! Key-value store port
//!
//! The persistence adapter only ever talks to a `KeyValueStore`. Each key
//! holds one whole collection as text; there are no partial writes.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};

/// A durable string-to-string store
pub trait KeyValueStore: Send + Sync {
    /// Whether a backend exists at all in this execution context
    ///
    /// Reads from an unavailable store yield nothing and writes are dropped.
    fn is_available(&self) -> bool {
        true
    }

    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;
}

/// In-process store, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stand-in for an execution context with no storage backend
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> TrackerResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> TrackerResult<()> {
        Ok(())
    }
}
