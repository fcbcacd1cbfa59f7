//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record shapes and the `BalanceRecord` trait
//! - `invocation`: Entry points, invocation records and outcomes
//! - `error`: Error types for the account ledger

pub mod account;
pub mod error;
pub mod invocation;

pub use account::{AccountId, Amount, BalanceRecord, ServiceAccount, Tariff, VehicleAccount};
pub use error::{ErrorClass, LedgerError};
pub use invocation::{
    EntryPoint, Footprint, InvocationOutcome, InvocationRecord, Sequence, WorldState,
};
