//! Account Ledger Library
//! # Overview
//!
//! This library implements a small ledger state machine for keyed account
//! records, together with a script-driven host that runs it either
//! sequentially or as key-partitioned concurrent batches.
//!
//! # Architecture
//!
//! - [`types`] - Records, invocations and the error taxonomy
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Ledger logic:
//!   - [`core::state_machine`] - Credit, debit and query operations
//!   - [`core::dispatcher`] - Operation table and entry-point routing
//!   - [`core::codec`] - Record and payload encoding
//!   - [`core::transaction`] - Per-invocation write buffering
//! - [`io`] - Script parsing and result output
//! - [`strategy`] - Sync and async host pipelines
//!
//! # Operations
//!
//! - **initialize** (`init`): write the deployment's seed records
//! - **credit** (`recievePayment`): add a positive amount to a balance
//! - **debit** (`sendPayment`): subtract a positive amount, never below zero
//! - **queryBalance** (`checkBalance`): read a balance
//! - **queryCost** (`getCost`): read a fixed service cost
//!
//! # Deployments
//!
//! - **parking**: one service account `Parking` with balance 0 and cost 10
//! - **rider**: vehicle `1` with balance 1000 and services `Wash` (15),
//!   `Parking` (20) and `Toll` (10)

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{
    AccountStateMachine, AccountStore, Chaincode, Dispatcher, LedgerProfile, MemoryStore,
    ParkingLedger, RiderLedger,
};
pub use io::write_state_csv;
pub use types::{
    AccountId, Amount, EntryPoint, ErrorClass, InvocationOutcome, InvocationRecord, LedgerError,
    ServiceAccount, Tariff, VehicleAccount, WorldState,
};
