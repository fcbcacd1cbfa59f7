//! Record codec
//!
//! The single source of truth for how records and query payloads look in the
//! store. Records are JSON objects (`{"id":"1","balance":1000}`), query
//! payloads are bare JSON integers (`25`).
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Amount, BalanceRecord, LedgerError};
use serde::{Deserialize, Serialize};

/// View over any record that may carry a tariff
///
/// `balance` is not read, but a present one must still be a valid amount.
#[derive(Debug, Deserialize)]
struct CostView {
    id: String,
    #[serde(default, rename = "balance")]
    _balance: Option<Amount>,
    #[serde(default)]
    cost: Option<Amount>,
}

/// Encode a record for storage under `key`
pub fn encode<T: Serialize>(key: &str, record: &T) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(record).map_err(|e| LedgerError::encode(key, e))
}

/// Decode the record stored under `key` as `R`
///
/// Fails with [`LedgerError::Decode`] when the bytes are not a well-formed
/// `R` or when the embedded id does not match the key.
pub fn decode_account<R: BalanceRecord>(key: &str, bytes: &[u8]) -> Result<R, LedgerError> {
    let record: R = serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(key, kind = R::KIND, error = %e, "stored record failed to decode");
        LedgerError::decode(key, R::KIND, e)
    })?;

    if record.id() != key {
        tracing::warn!(key, stored_id = record.id(), "stored record id does not match its key");
        return Err(LedgerError::decode(
            key,
            R::KIND,
            format!("stored id '{}'", record.id()),
        ));
    }

    Ok(record)
}

/// Decode the `cost` field of the record stored under `key`
///
/// Works for every record shape carrying a cost. A well-formed record without
/// one fails with [`LedgerError::MissingCost`].
pub fn decode_cost(key: &str, bytes: &[u8]) -> Result<Amount, LedgerError> {
    let view: CostView = serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(key, error = %e, "stored record failed to decode");
        LedgerError::decode(key, "priced", e)
    })?;

    if view.id != key {
        return Err(LedgerError::decode(
            key,
            "priced",
            format!("stored id '{}'", view.id),
        ));
    }

    view.cost.ok_or_else(|| LedgerError::missing_cost(key))
}

/// Encode a query result
pub fn encode_scalar(value: Amount) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Decode a query result produced by [`encode_scalar`]
pub fn decode_scalar(bytes: &[u8]) -> Result<Amount, LedgerError> {
    serde_json::from_slice(bytes).map_err(|e| LedgerError::decode("", "scalar", e))
}
