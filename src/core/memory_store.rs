//! In-memory account store
//!
//! This module provides the `MemoryStore` struct, a single-threaded
//! [`AccountStore`] backed by a `HashMap`. It stands in for the host-managed
//! store in the sync host and in tests.
//!
//! The MemoryStore supports:
//! - Raw reads and writes of record bytes
//! - All-or-nothing application of write sets
//! - Simulated outages, so callers can exercise `Store` error paths
//! - Sorted snapshots of the world state

use crate::core::traits::AccountStore;
use crate::types::{LedgerError, WorldState};
use std::collections::{BTreeMap, HashMap};

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Map of store keys to raw record bytes
    entries: HashMap<String, Vec<u8>>,

    /// When set, every read and write fails
    unavailable: bool,

    /// Number of successful writes since creation
    writes: usize,
}

impl MemoryStore {
    /// Create an empty, reachable store
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backend becoming unreachable (or reachable again)
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Write raw bytes directly, bypassing availability checks
    ///
    /// Used to plant records, including corrupt ones.
    pub fn insert_raw(&mut self, key: &str, value: &[u8]) {
        self.entries.insert(key.to_string(), value.to_vec());
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Copy of all entries sorted by key
    pub fn snapshot(&self) -> WorldState {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_available(&self) -> Result<(), LedgerError> {
        if self.unavailable {
            return Err(LedgerError::store("in-memory store is unavailable"));
        }
        Ok(())
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.ensure_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.ensure_available()?;
        self.entries.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }

    fn apply(&mut self, writes: BTreeMap<String, Vec<u8>>) -> Result<(), LedgerError> {
        // Availability is checked once up front so a batch lands whole or not at all
        self.ensure_available()?;
        self.writes += writes.len();
        self.entries.extend(writes);
        Ok(())
    }
}
