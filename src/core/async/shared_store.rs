//! Thread-safe account store for the async host
//!
//! `SharedStore` wraps an `Arc<DashMap>` so that every task of a batch holds
//! its own cheap handle onto the same world state. DashMap shards its locks,
//! so tasks working on different keys do not contend.

use crate::core::traits::AccountStore;
use crate::types::{LedgerError, WorldState};
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent key-value store shared across tasks
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    entries: Arc<DashMap<String, Vec<u8>>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all entries sorted by key
    ///
    /// Entries written concurrently with the call may or may not be included.
    pub fn snapshot(&self) -> WorldState {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AccountStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
