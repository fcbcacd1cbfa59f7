//! Per-invocation transaction context
//!
//! A `TransactionContext` wraps the committed store for the duration of one
//! invocation. Reads go straight to committed state and are logged; writes
//! are buffered and only reach the store through [`TransactionContext::commit`].
//! Dropping the context discards every buffered write, which is how a failed
//! invocation is rolled back.
//!
//! Pending writes are not visible to reads made by the same invocation, the
//! same isolation a ledger peer gives chaincode during simulation.

use crate::core::traits::AccountStore;
use crate::types::LedgerError;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Write-buffering overlay over a committed store
pub struct TransactionContext<'a> {
    base: &'a mut dyn AccountStore,
    reads: RefCell<Vec<String>>,
    writes: BTreeMap<String, Vec<u8>>,
}

impl<'a> TransactionContext<'a> {
    pub fn new(base: &'a mut dyn AccountStore) -> Self {
        Self {
            base,
            reads: RefCell::new(Vec::new()),
            writes: BTreeMap::new(),
        }
    }

    /// Keys read so far, in read order
    pub fn read_keys(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    /// Number of times `key` was read
    pub fn read_count(&self, key: &str) -> usize {
        self.reads.borrow().iter().filter(|k| *k == key).count()
    }

    /// Keys with a buffered write, sorted
    pub fn written_keys(&self) -> Vec<&str> {
        self.writes.keys().map(String::as_str).collect()
    }

    /// Buffered writes to keys this invocation never read
    pub fn unread_writes(&self) -> Vec<&str> {
        let reads = self.reads.borrow();
        self.writes
            .keys()
            .filter(|k| !reads.contains(k))
            .map(String::as_str)
            .collect()
    }

    /// Apply the buffered writes to the committed store
    ///
    /// Returns the number of keys written.
    pub fn commit(self) -> Result<usize, LedgerError> {
        let count = self.writes.len();
        if count > 0 {
            self.base.apply(self.writes)?;
        }
        Ok(count)
    }
}

impl AccountStore for TransactionContext<'_> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.reads.borrow_mut().push(key.to_string());
        self.base.get(key)
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.writes.insert(key.to_string(), value);
        Ok(())
    }
}
