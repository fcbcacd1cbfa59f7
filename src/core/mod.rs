//! Core ledger logic
//!
//! This module contains the ledger components:
//! - `traits` - Store, profile and chaincode abstractions
//! - `codec` - Record and payload encoding
//! - `profile` - The parking and rider deployments
//! - `state_machine` - Credit, debit and query operations
//! - `dispatcher` - Operation table and entry-point routing
//! - `transaction` - Write-buffering overlay for one invocation
//! - `executor` - Runs an invocation and commits or discards its writes
//! - `memory_store` - Single-threaded in-memory store
//! - `async` - Concurrent store and batch processor

pub mod r#async;
pub mod codec;
pub mod dispatcher;
pub mod executor;
pub mod memory_store;
pub mod profile;
pub mod state_machine;
pub mod traits;
pub mod transaction;

pub use dispatcher::{Dispatcher, Operation, OperationTable};
pub use executor::execute;
pub use memory_store::MemoryStore;
pub use profile::{ParkingLedger, RiderLedger};
pub use r#async::{BatchProcessor, SharedStore};
pub use state_machine::AccountStateMachine;
pub use traits::{AccountStore, Chaincode, LedgerProfile};
pub use transaction::TransactionContext;
