//! Storage layer for the expense tracker
//!
//! Persists the transaction and budget collections through an injected
//! `KeyValueStore`. Each collection is read and written whole; there is no
//! transaction spanning the two.

pub mod budgets;
pub mod collection;
pub mod file_io;
pub mod store;
pub mod transactions;

pub use budgets::{BudgetCollection, BUDGETS_KEY};
pub use collection::{Collection, Record};
pub use file_io::{read_json, write_json_atomic, FileStore};
pub use store::{KeyValueStore, MemoryStore, UnavailableStore};
pub use transactions::{TransactionCollection, TRANSACTIONS_KEY};

use std::sync::Arc;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Main storage coordinator that provides access to both collections
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
    pub transactions: TransactionCollection,
    pub budgets: BudgetCollection,
}

impl Storage {
    /// Create storage over any key-value backend
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transactions: Collection::new(Arc::clone(&store), TRANSACTIONS_KEY),
            budgets: Collection::new(Arc::clone(&store), BUDGETS_KEY),
            store,
        }
    }

    /// Open file-backed storage in the data directory
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(Arc::new(FileStore::new(paths.data_dir()))))
    }

    /// Storage backed by process memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Storage for a context with no backend: loads are empty, saves are dropped
    pub fn unavailable() -> Self {
        Self::new(Arc::new(UnavailableStore))
    }

    /// Whether a backend is present
    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }
}
