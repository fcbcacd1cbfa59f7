//! Core traits for account storage, ledger profiles and the chaincode boundary
//!
//! This module defines the seams of the ledger: the store the state machine
//! reads and writes, the profile describing one deployment, and the
//! object-safe chaincode interface the host invokes.

use crate::types::{BalanceRecord, EntryPoint, Footprint, LedgerError, Tariff};
use std::collections::BTreeMap;

/// Key-value persistence consumed by the state machine
///
/// `get` returns `Ok(None)` for keys that were never written. Implementations
/// report an unreachable backend as [`LedgerError::Store`].
pub trait AccountStore {
    /// Read the raw record stored under `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write the raw record for `key`
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Apply a complete write set
    ///
    /// The default writes key by key. Stores that can do better override this
    /// to apply all writes or none.
    fn apply(&mut self, writes: BTreeMap<String, Vec<u8>>) -> Result<(), LedgerError> {
        for (key, value) in writes {
            self.put(&key, value)?;
        }
        Ok(())
    }
}

/// One deployment of the ledger: its primary record type and seed set
pub trait LedgerProfile: Send + Sync + 'static {
    /// Record type credited, debited and queried for balance
    type Account: BalanceRecord;

    /// Short deployment name used in logs
    const NAME: &'static str;

    /// Accounts written by initialization
    fn seed_accounts() -> Vec<Self::Account>;

    /// Fixed-cost entries written by initialization
    fn seed_tariffs() -> Vec<Tariff> {
        Vec::new()
    }
}

/// Entry points the host platform calls, one per invocation
///
/// Object safe so a host can pick the deployment at runtime.
pub trait Chaincode: Send + Sync {
    /// Deployment name
    fn name(&self) -> &'static str;

    /// Bootstrap entry point
    fn init(&self, store: &mut dyn AccountStore, args: &[String]) -> Result<(), LedgerError>;

    /// State-changing entry point
    fn invoke(
        &self,
        store: &mut dyn AccountStore,
        function: &str,
        args: &[String],
    ) -> Result<(), LedgerError>;

    /// Read-only entry point, returns the encoded scalar payload
    fn query(
        &self,
        store: &dyn AccountStore,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, LedgerError>;

    /// Keys the invocation may touch, computed without store access
    fn footprint(&self, entry: EntryPoint, function: &str, args: &[String]) -> Footprint;
}
