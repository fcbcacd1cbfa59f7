//! Operation dispatch
//!
//! This module maps the operation names received at the `init`, `invoke` and
//! `query` entry points onto the [`AccountStateMachine`].
//!
//! Dispatch is table driven. Every canonical name and alias is registered in
//! an [`OperationTable`] when the dispatcher is built, and a table in which
//! two operations claim the same name is rejected up front. Arity is checked
//! before the state machine runs, so malformed calls never reach the store.

use crate::core::state_machine::AccountStateMachine;
use crate::core::traits::{AccountStore, Chaincode, LedgerProfile};
use crate::types::{EntryPoint, Footprint, LedgerError};
use std::collections::HashMap;

/// Operations understood by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Initialize,
    Credit,
    Debit,
    QueryBalance,
    QueryCost,
}

impl Operation {
    /// Every operation, in registration order
    pub const ALL: [Operation; 5] = [
        Operation::Initialize,
        Operation::Credit,
        Operation::Debit,
        Operation::QueryBalance,
        Operation::QueryCost,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::Credit => "credit",
            Operation::Debit => "debit",
            Operation::QueryBalance => "queryBalance",
            Operation::QueryCost => "queryCost",
        }
    }

    /// Legacy names still accepted by existing clients
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Operation::Initialize => &["init"],
            // Misspelling is part of the deployed wire protocol
            Operation::Credit => &["recievePayment"],
            Operation::Debit => &["sendPayment"],
            Operation::QueryBalance => &["checkBalance"],
            Operation::QueryCost => &["getCost"],
        }
    }

    /// Number of string arguments the operation takes
    pub fn arity(self) -> usize {
        match self {
            Operation::Initialize => 0,
            Operation::Credit | Operation::Debit => 2,
            Operation::QueryBalance | Operation::QueryCost => 1,
        }
    }

    /// Entry point that serves this operation
    pub fn entry(self) -> EntryPoint {
        match self {
            Operation::Initialize | Operation::Credit | Operation::Debit => EntryPoint::Invoke,
            Operation::QueryBalance | Operation::QueryCost => EntryPoint::Query,
        }
    }

    fn names(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical_name()).chain(self.aliases().iter().copied())
    }
}

/// Name → operation lookup, validated at construction
#[derive(Debug, Clone)]
pub struct OperationTable {
    entries: HashMap<&'static str, Operation>,
}

impl OperationTable {
    /// Build a table from `operations`
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::OperationConflict`] if any name (canonical or
    /// alias) is claimed twice.
    pub fn new(operations: &[Operation]) -> Result<Self, LedgerError> {
        let mut entries = HashMap::new();

        for &operation in operations {
            for name in operation.names() {
                if entries.insert(name, operation).is_some() {
                    return Err(LedgerError::OperationConflict {
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Table holding every operation
    pub fn standard() -> Result<Self, LedgerError> {
        Self::new(&Operation::ALL)
    }

    /// Look up `name` as received at `entry`
    ///
    /// A known name sent to the wrong entry point is reported the same way as
    /// an unknown one.
    pub fn resolve(&self, entry: EntryPoint, name: &str) -> Result<Operation, LedgerError> {
        match self.entries.get(name) {
            Some(&operation) if operation.entry() == entry => Ok(operation),
            _ => Err(LedgerError::unknown_operation(name, entry)),
        }
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Chaincode front end for one ledger profile
pub struct Dispatcher<P: LedgerProfile> {
    table: OperationTable,
    machine: AccountStateMachine<P>,
}

impl<P: LedgerProfile> Dispatcher<P> {
    pub fn new() -> Result<Self, LedgerError> {
        Ok(Self {
            table: OperationTable::standard()?,
            machine: AccountStateMachine::new(),
        })
    }

    fn check_arity(operation: Operation, args: &[String]) -> Result<(), LedgerError> {
        if args.len() != operation.arity() {
            return Err(LedgerError::wrong_argument_count(
                operation.canonical_name(),
                operation.arity(),
                args.len(),
            ));
        }
        Ok(())
    }
}

impl<P: LedgerProfile> Chaincode for Dispatcher<P> {
    fn name(&self) -> &'static str {
        P::NAME
    }

    fn init(&self, store: &mut dyn AccountStore, args: &[String]) -> Result<(), LedgerError> {
        Self::check_arity(Operation::Initialize, args)?;
        self.machine.initialize(store)
    }

    fn invoke(
        &self,
        store: &mut dyn AccountStore,
        function: &str,
        args: &[String],
    ) -> Result<(), LedgerError> {
        let operation = self.table.resolve(EntryPoint::Invoke, function)?;
        Self::check_arity(operation, args)?;

        tracing::debug!(
            ledger = P::NAME,
            function,
            operation = operation.canonical_name(),
            "dispatching invoke"
        );

        match operation {
            Operation::Initialize => self.machine.initialize(store),
            Operation::Credit => self.machine.credit(store, &args[0], &args[1]),
            Operation::Debit => self.machine.debit(store, &args[0], &args[1]),
            Operation::QueryBalance | Operation::QueryCost => {
                Err(LedgerError::unknown_operation(function, EntryPoint::Invoke))
            }
        }
    }

    fn query(
        &self,
        store: &dyn AccountStore,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, LedgerError> {
        let operation = self.table.resolve(EntryPoint::Query, function)?;
        Self::check_arity(operation, args)?;

        tracing::debug!(
            ledger = P::NAME,
            function,
            operation = operation.canonical_name(),
            "dispatching query"
        );

        match operation {
            Operation::QueryBalance => self.machine.query_balance(store, &args[0]),
            Operation::QueryCost => self.machine.query_cost(store, &args[0]),
            Operation::Initialize | Operation::Credit | Operation::Debit => {
                Err(LedgerError::unknown_operation(function, EntryPoint::Query))
            }
        }
    }

    fn footprint(&self, entry: EntryPoint, function: &str, args: &[String]) -> Footprint {
        let operation = match entry {
            EntryPoint::Init => Ok(Operation::Initialize),
            EntryPoint::Invoke | EntryPoint::Query => self.table.resolve(entry, function),
        };

        match operation {
            Ok(op) if args.len() != op.arity() => Footprint::Isolated,
            Ok(Operation::Initialize) => Footprint::Global,
            Ok(_) => Footprint::Key(args[0].clone()),
            Err(_) => Footprint::Isolated,
        }
    }
}
