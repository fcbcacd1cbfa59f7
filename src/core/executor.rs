//! Invocation executor
//!
//! Runs one [`InvocationRecord`] against a chaincode inside a fresh
//! [`TransactionContext`]. Buffered writes are committed only when the
//! chaincode succeeds; on failure the context is dropped and the store is
//! left exactly as it was.

use crate::core::traits::{AccountStore, Chaincode};
use crate::core::transaction::TransactionContext;
use crate::types::{EntryPoint, InvocationOutcome, InvocationRecord, LedgerError};

/// Execute a single invocation and report its outcome
pub fn execute(
    chaincode: &dyn Chaincode,
    store: &mut dyn AccountStore,
    record: &InvocationRecord,
) -> InvocationOutcome {
    let result = run(chaincode, store, record);

    match &result {
        Ok(_) => tracing::debug!(
            seq = record.seq,
            entry = %record.entry,
            function = %record.function,
            "invocation committed"
        ),
        Err(e) => tracing::warn!(
            seq = record.seq,
            entry = %record.entry,
            function = %record.function,
            class = %e.class(),
            error = %e,
            "invocation rejected"
        ),
    }

    InvocationOutcome {
        seq: record.seq,
        entry: record.entry,
        function: record.function.clone(),
        result,
    }
}

fn run(
    chaincode: &dyn Chaincode,
    store: &mut dyn AccountStore,
    record: &InvocationRecord,
) -> Result<Option<Vec<u8>>, LedgerError> {
    let mut tx = TransactionContext::new(store);

    let payload = match record.entry {
        EntryPoint::Init => chaincode.init(&mut tx, &record.args).map(|_| None)?,
        EntryPoint::Invoke => chaincode
            .invoke(&mut tx, &record.function, &record.args)
            .map(|_| None)?,
        EntryPoint::Query => Some(chaincode.query(&tx, &record.function, &record.args)?),
    };

    tx.commit()?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatcher::Dispatcher;
    use crate::core::memory_store::MemoryStore;
    use crate::core::profile::{ParkingLedger, RiderLedger};
    use crate::types::ErrorClass;

    fn record(seq: u64, entry: EntryPoint, function: &str, args: &[&str]) -> InvocationRecord {
        InvocationRecord::new(seq, entry, function, args)
    }

    #[test]
    fn test_init_then_credit_then_query() {
        let chaincode = Dispatcher::<ParkingLedger>::new().unwrap();
        let mut store = MemoryStore::new();

        let init = execute(&chaincode, &mut store, &record(1, EntryPoint::Init, "", &[]));
        let credit = execute(
            &chaincode,
            &mut store,
            &record(2, EntryPoint::Invoke, "credit", &["Parking", "25"]),
        );
        let query = execute(
            &chaincode,
            &mut store,
            &record(3, EntryPoint::Query, "queryBalance", &["Parking"]),
        );

        assert_eq!(init.result, Ok(None));
        assert_eq!(credit.result, Ok(None));
        assert_eq!(query.result, Ok(Some(b"25".to_vec())));
        assert_eq!(query.seq, 3);
        assert_eq!(query.function, "queryBalance");
    }

    #[test]
    fn test_failed_invocation_leaves_store_untouched() {
        let chaincode = Dispatcher::<RiderLedger>::new().unwrap();
        let mut store = MemoryStore::new();
        execute(&chaincode, &mut store, &record(1, EntryPoint::Init, "", &[]));
        let before = store.snapshot();
        let writes = store.write_count();

        let outcome = execute(
            &chaincode,
            &mut store,
            &record(2, EntryPoint::Invoke, "debit", &["1", "1500"]),
        );

        assert!(!outcome.is_ok());
        assert_eq!(
            outcome.result.unwrap_err().class(),
            ErrorClass::InsufficientBalance
        );
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_query_commits_nothing() {
        let chaincode = Dispatcher::<RiderLedger>::new().unwrap();
        let mut store = MemoryStore::new();
        execute(&chaincode, &mut store, &record(1, EntryPoint::Init, "", &[]));
        let writes = store.write_count();

        let outcome = execute(
            &chaincode,
            &mut store,
            &record(2, EntryPoint::Query, "getCost", &["Wash"]),
        );

        assert_eq!(outcome.result, Ok(Some(b"15".to_vec())));
        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn test_initialize_is_applied_as_one_write_set() {
        let chaincode = Dispatcher::<RiderLedger>::new().unwrap();
        let mut store = MemoryStore::new();
        store.set_unavailable(true);

        let outcome = execute(&chaincode, &mut store, &record(1, EntryPoint::Init, "", &[]));

        assert!(matches!(outcome.result, Err(LedgerError::Store { .. })));
        store.set_unavailable(false);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_operation_outcome() {
        let chaincode = Dispatcher::<ParkingLedger>::new().unwrap();
        let mut store = MemoryStore::new();

        let outcome = execute(
            &chaincode,
            &mut store,
            &record(7, EntryPoint::Invoke, "transferAll", &[]),
        );

        assert_eq!(outcome.seq, 7);
        assert_eq!(
            outcome.result,
            Err(LedgerError::unknown_operation("transferAll", EntryPoint::Invoke))
        );
    }
}
