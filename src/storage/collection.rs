//! Generic collection adapter
//!
//! A collection is an ordered sequence of records stored as one JSON array
//! under one key. Every mutation is a read-modify-write of the whole array,
//! and a mutation never overwrites a payload it could not parse.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::store::KeyValueStore;
use crate::error::{TrackerError, TrackerResult};

/// A record type that can live in a collection
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Id: PartialEq + Clone + fmt::Display;
    /// Fields supplied when creating a record (everything but the id)
    type New;
    /// Partial update
    type Patch;

    /// Entity name used in diagnostics
    const ENTITY: &'static str;

    fn id(&self) -> &Self::Id;

    /// Build a record from its fields, assigning a fresh id
    fn create(fields: Self::New) -> Self;

    /// Merge a patch into the record
    fn apply(&mut self, patch: Self::Patch);
}

/// Persistence adapter for one named collection
pub struct Collection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Collection<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Load every record
    ///
    /// Never fails: a missing backend, an absent key, an unreadable value or
    /// a malformed payload all yield an empty collection.
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(records) => records,
            Err(err) => {
                warn!(key = self.key, error = %err, "using empty collection");
                Vec::new()
            }
        }
    }

    /// Load for a mutation: unreadable or malformed data is an error, so the
    /// write that follows never replaces it.
    fn try_load(&self) -> TrackerResult<Vec<T>> {
        if !self.store.is_available() {
            debug!(key = self.key, "no storage backend; using empty collection");
            return Ok(Vec::new());
        }

        let text = match self.store.get(self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return Ok(Vec::new()),
            Err(err) => {
                return Err(TrackerError::Storage(format!(
                    "failed to read {} collection: {}",
                    T::ENTITY,
                    err
                )))
            }
        };

        let records = serde_json::from_str::<Vec<T>>(&text).map_err(|err| {
            TrackerError::Storage(format!("stored {} collection is malformed: {}", T::ENTITY, err))
        })?;
        debug!(key = self.key, count = records.len(), "loaded collection");
        Ok(records)
    }

    /// Replace the stored collection with `records`
    pub fn save(&self, records: &[T]) -> TrackerResult<()> {
        if !self.store.is_available() {
            debug!(key = self.key, "no storage backend; dropping write");
            return Ok(());
        }

        let text = serde_json::to_string(records)?;
        self.store.set(self.key, &text)?;
        debug!(key = self.key, count = records.len(), "saved collection");
        Ok(())
    }

    /// Find a record by id
    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.load().into_iter().find(|r| r.id() == id)
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Append a new record with a freshly assigned id
    ///
    /// Fails without writing if the stored collection can't be read.
    pub fn add(&self, fields: T::New) -> TrackerResult<T> {
        let mut records = self.try_load()?;
        let record = T::create(fields);
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    /// Merge a patch into the record with `id`
    ///
    /// Returns `None` without writing if no such record exists.
    pub fn update(&self, id: &T::Id, patch: T::Patch) -> TrackerResult<Option<T>> {
        let mut records = self.try_load()?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            debug!(key = self.key, %id, "update of unknown {}", T::ENTITY);
            return Ok(None);
        };

        record.apply(patch);
        let updated = record.clone();
        self.save(&records)?;
        Ok(Some(updated))
    }

    /// Remove the record with `id`
    ///
    /// Returns `false` without writing if no such record exists.
    pub fn delete(&self, id: &T::Id) -> TrackerResult<bool> {
        let records = self.try_load()?;
        let before = records.len();
        let remaining: Vec<T> = records.into_iter().filter(|r| r.id() != id).collect();

        if remaining.len() == before {
            debug!(key = self.key, %id, "delete of unknown {}", T::ENTITY);
            return Ok(false);
        }

        self.save(&remaining)?;
        Ok(true)
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key,
            _record: PhantomData,
        }
    }
}
