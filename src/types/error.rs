//! Error types for the account ledger
//!
//! This module defines every error an invocation can produce. Each variant
//! belongs to one [`ErrorClass`], which is what the host reports as the
//! invocation outcome.
//!
//! # Error Categories
//!
//! - **Argument Errors**: wrong argument count, unparsable or non-positive amounts
//! - **Lookup Errors**: the referenced account was never written
//! - **Integrity Errors**: stored bytes do not match the expected record shape
//! - **Business Rule Errors**: insufficient balance for a debit
//! - **Store Errors**: the persistence layer rejected a read or write
//! - **Dispatch Errors**: unknown operation names, conflicting operation tables

use super::account::Amount;
use super::invocation::EntryPoint;
use std::fmt;
use thiserror::Error;

/// Main error type for the account ledger
///
/// Every error is surfaced to the caller as-is. No variant is recovered from
/// locally and none of them leaves a partial write behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The operation was called with the wrong number of arguments
    ///
    /// Detected before any store access.
    #[error("Incorrect number of arguments for {operation}: expected {expected} but got {actual}")]
    WrongArgumentCount {
        /// Canonical operation name
        operation: String,
        /// Number of arguments the operation takes
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },

    /// The amount argument is not a base-10 integer literal
    #[error("Amount '{amount}' is not an integer literal")]
    InvalidAmount {
        /// The raw argument as received
        amount: String,
    },

    /// The amount parsed but is zero or negative
    #[error("Amount {amount} must be greater than zero")]
    NonPositiveAmount {
        /// The parsed amount
        amount: Amount,
    },

    /// The new balance does not fit in the balance type
    #[error("Arithmetic overflow in {operation} on account '{id}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account key
        id: String,
    },

    /// No record was ever written under this key
    #[error("Account '{id}' not found")]
    AccountNotFound {
        /// Account key
        id: String,
    },

    /// The stored bytes are not a valid record of the expected shape
    ///
    /// This is a data-integrity fault, never an "absent" condition. The
    /// decoder detail is kept for diagnostics but is not part of the message.
    #[error("Record '{id}' is not a valid {expected} record")]
    Decode {
        /// Key the record was read from
        id: String,
        /// Name of the record shape that was expected
        expected: String,
        /// Decoder diagnostic
        detail: String,
    },

    /// The record decoded but carries no `cost` field
    #[error("Record '{id}' has no cost field")]
    MissingCost {
        /// Key the record was read from
        id: String,
    },

    /// A record could not be serialized
    #[error("Failed to encode record '{id}': {message}")]
    Encode {
        /// Key of the record being written
        id: String,
        /// Serializer diagnostic
        message: String,
    },

    /// Debit amount exceeds the current balance
    ///
    /// A business-rule rejection. The stored record is left exactly as read.
    #[error("Insufficient balance on account '{id}': available {balance} but requested {requested}")]
    InsufficientBalance {
        /// Account key
        id: String,
        /// Balance at the time of the debit
        balance: Amount,
        /// Requested debit amount
        requested: Amount,
    },

    /// The persistence layer is unreachable or rejected the request
    #[error("Store error: {message}")]
    Store {
        /// Description of the store failure
        message: String,
    },

    /// The operation name is not served by the entry point it was sent to
    #[error("Unknown {entry} operation '{name}'")]
    UnknownOperation {
        /// The offending operation name
        name: String,
        /// Entry point that received it
        entry: EntryPoint,
    },

    /// Two operations claim the same name in the dispatch table
    #[error("Operation name '{name}' is registered more than once")]
    OperationConflict {
        /// The duplicated name
        name: String,
    },
}

/// Error taxonomy reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Argument,
    NotFound,
    Decode,
    InsufficientBalance,
    Store,
    UnknownOperation,
    Configuration,
}

impl ErrorClass {
    /// Stable lowercase name used in result files
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::Argument => "argument",
            ErrorClass::NotFound => "not_found",
            ErrorClass::Decode => "decode",
            ErrorClass::InsufficientBalance => "insufficient_balance",
            ErrorClass::Store => "store",
            ErrorClass::UnknownOperation => "unknown_operation",
            ErrorClass::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LedgerError {
    /// Class of this error in the host-facing taxonomy
    pub fn class(&self) -> ErrorClass {
        match self {
            LedgerError::WrongArgumentCount { .. }
            | LedgerError::InvalidAmount { .. }
            | LedgerError::NonPositiveAmount { .. }
            | LedgerError::ArithmeticOverflow { .. } => ErrorClass::Argument,
            LedgerError::AccountNotFound { .. } => ErrorClass::NotFound,
            LedgerError::Decode { .. }
            | LedgerError::MissingCost { .. }
            | LedgerError::Encode { .. } => ErrorClass::Decode,
            LedgerError::InsufficientBalance { .. } => ErrorClass::InsufficientBalance,
            LedgerError::Store { .. } => ErrorClass::Store,
            LedgerError::UnknownOperation { .. } => ErrorClass::UnknownOperation,
            LedgerError::OperationConflict { .. } => ErrorClass::Configuration,
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a WrongArgumentCount error
    pub fn wrong_argument_count(operation: &str, expected: usize, actual: usize) -> Self {
        LedgerError::WrongArgumentCount {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create a Decode error
    pub fn decode(id: &str, expected: &str, detail: impl fmt::Display) -> Self {
        LedgerError::Decode {
            id: id.to_string(),
            expected: expected.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Create a MissingCost error
    pub fn missing_cost(id: &str) -> Self {
        LedgerError::MissingCost { id: id.to_string() }
    }

    /// Create an Encode error
    pub fn encode(id: &str, message: impl fmt::Display) -> Self {
        LedgerError::Encode {
            id: id.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(id: &str, balance: Amount, requested: Amount) -> Self {
        LedgerError::InsufficientBalance {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create a Store error
    pub fn store(message: impl fmt::Display) -> Self {
        LedgerError::Store {
            message: message.to_string(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(name: &str, entry: EntryPoint) -> Self {
        LedgerError::UnknownOperation {
            name: name.to_string(),
            entry,
        }
    }
}
