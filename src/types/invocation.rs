//! Invocation-related types for the account ledger
//!
//! This module defines the entry points of the chaincode boundary, the
//! invocation records read from scripts and the outcomes the host reports.

use super::error::LedgerError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Position of an invocation in its script (1-based)
pub type Sequence = u64;

/// Full key → record map of a store, sorted by key
pub type WorldState = BTreeMap<String, Vec<u8>>;

/// Entry points exposed to the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// One-shot bootstrap, always runs initialization
    Init,

    /// State-changing operations
    Invoke,

    /// Read-only operations
    Query,
}

impl EntryPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryPoint::Init => "init",
            EntryPoint::Invoke => "invoke",
            EntryPoint::Query => "query",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "init" => Ok(EntryPoint::Init),
            "invoke" => Ok(EntryPoint::Invoke),
            "query" => Ok(EntryPoint::Query),
            _ => Err(format!("Invalid entry point: '{}'", s)),
        }
    }
}

/// A single invocation as received from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRecord {
    /// Position in the script, used to restore ordering of results
    pub seq: Sequence,

    /// Entry point the invocation is addressed to
    pub entry: EntryPoint,

    /// Operation name; ignored by the `init` entry point
    pub function: String,

    /// Ordered string arguments
    pub args: Vec<String>,
}

impl InvocationRecord {
    pub fn new(seq: Sequence, entry: EntryPoint, function: &str, args: &[&str]) -> Self {
        Self {
            seq,
            entry,
            function: function.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Keys an invocation may touch, known before it runs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Footprint {
    /// May write any number of keys (initialization)
    Global,

    /// Reads and possibly writes exactly this key
    Key(String),

    /// Fails before touching the store
    Isolated,
}

/// Result of running one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOutcome {
    pub seq: Sequence,
    pub entry: EntryPoint,
    pub function: String,

    /// Query payload for queries, `None` for mutations, or the error
    pub result: Result<Option<Vec<u8>>, LedgerError>,
}

impl InvocationOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
