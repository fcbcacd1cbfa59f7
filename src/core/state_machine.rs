//! Account state machine
//!
//! This module provides the `AccountStateMachine`, which implements every
//! ledger operation as a single read-validate-mutate-write cycle against an
//! [`AccountStore`].
//!
//! The state machine is responsible for:
//! - Writing the seed records of its ledger profile
//! - Parsing amount arguments before any store access
//! - Crediting and debiting balances with checked arithmetic
//! - Answering balance and cost queries without writing
//!
//! It keeps no state between invocations. Every key is read at most once per
//! operation and only a key that was just read and validated is written back.

use crate::core::codec;
use crate::core::traits::{AccountStore, LedgerProfile};
use crate::types::{Amount, BalanceRecord, LedgerError};
use std::marker::PhantomData;

/// Ledger operations for one profile
///
/// Generic over the [`LedgerProfile`], which fixes the record shape that is
/// credited, debited and queried, and the seed set written by `initialize`.
pub struct AccountStateMachine<P: LedgerProfile> {
    profile: PhantomData<fn() -> P>,
}

impl<P: LedgerProfile> AccountStateMachine<P> {
    pub fn new() -> Self {
        Self {
            profile: PhantomData,
        }
    }

    /// Write the profile's seed records
    ///
    /// Running it again overwrites those keys with their seed values and
    /// discards any accumulated balance. Guarding against that is the
    /// caller's job.
    pub fn initialize<S>(&self, store: &mut S) -> Result<(), LedgerError>
    where
        S: AccountStore + ?Sized,
    {
        for account in P::seed_accounts() {
            let bytes = codec::encode(account.id(), &account)?;
            store.put(account.id(), bytes)?;
        }

        for tariff in P::seed_tariffs() {
            let bytes = codec::encode(&tariff.id, &tariff)?;
            store.put(&tariff.id, bytes)?;
        }

        tracing::info!(ledger = P::NAME, "seed records written");
        Ok(())
    }

    /// Add `amount` to the balance of `id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is not a positive integer literal (before any store access)
    /// - The account does not exist or its record does not decode
    /// - The new balance would overflow
    /// - The store rejects the read or the write
    pub fn credit<S>(&self, store: &mut S, id: &str, amount: &str) -> Result<(), LedgerError>
    where
        S: AccountStore + ?Sized,
    {
        let amount = parse_amount(amount)?;

        let account = self.update(store, id, |account| {
            let balance = account
                .balance()
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("credit", id))?;
            account.set_balance(balance);
            Ok(())
        })?;

        tracing::debug!(
            ledger = P::NAME,
            id,
            amount,
            balance = account.balance(),
            "credit applied"
        );
        Ok(())
    }

    /// Subtract `amount` from the balance of `id`
    ///
    /// A debit larger than the current balance fails with
    /// [`LedgerError::InsufficientBalance`] and writes nothing.
    pub fn debit<S>(&self, store: &mut S, id: &str, amount: &str) -> Result<(), LedgerError>
    where
        S: AccountStore + ?Sized,
    {
        let amount = parse_amount(amount)?;

        let account = self.update(store, id, |account| {
            if amount > account.balance() {
                return Err(LedgerError::insufficient_balance(
                    id,
                    account.balance(),
                    amount,
                ));
            }

            let balance = account
                .balance()
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("debit", id))?;
            account.set_balance(balance);
            Ok(())
        })?;

        tracing::debug!(
            ledger = P::NAME,
            id,
            amount,
            balance = account.balance(),
            "debit applied"
        );
        Ok(())
    }

    /// Balance of `id`, encoded as a scalar payload
    pub fn query_balance<S>(&self, store: &S, id: &str) -> Result<Vec<u8>, LedgerError>
    where
        S: AccountStore + ?Sized,
    {
        let account = self.load(store, id)?;
        Ok(codec::encode_scalar(account.balance()))
    }

    /// Tariff of `id`, encoded as a scalar payload
    ///
    /// Fails with [`LedgerError::MissingCost`] for records without a cost.
    pub fn query_cost<S>(&self, store: &S, id: &str) -> Result<Vec<u8>, LedgerError>
    where
        S: AccountStore + ?Sized,
    {
        let bytes = read_record(store, id)?;
        let cost = codec::decode_cost(id, &bytes)?;
        Ok(codec::encode_scalar(cost))
    }

    fn load<S>(&self, store: &S, id: &str) -> Result<P::Account, LedgerError>
    where
        S: AccountStore + ?Sized,
    {
        let bytes = read_record(store, id)?;
        codec::decode_account(id, &bytes)
    }

    /// Load, mutate and write back one account
    ///
    /// Nothing is written when the closure fails.
    fn update<S, F>(&self, store: &mut S, id: &str, f: F) -> Result<P::Account, LedgerError>
    where
        S: AccountStore + ?Sized,
        F: FnOnce(&mut P::Account) -> Result<(), LedgerError>,
    {
        let mut account = self.load(store, id)?;
        f(&mut account)?;

        let bytes = codec::encode(id, &account)?;
        store.put(id, bytes)?;
        Ok(account)
    }
}

impl<P: LedgerProfile> Default for AccountStateMachine<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a credit/debit amount
///
/// Accepts base-10 integer literals with an optional sign. Zero and negative
/// amounts are rejected.
pub fn parse_amount(raw: &str) -> Result<Amount, LedgerError> {
    let amount: Amount = raw
        .parse()
        .map_err(|_| LedgerError::invalid_amount(raw))?;

    if amount <= 0 {
        return Err(LedgerError::NonPositiveAmount { amount });
    }

    Ok(amount)
}

/// Read the raw record for `id`, treating empty values as absent
fn read_record<S>(store: &S, id: &str) -> Result<Vec<u8>, LedgerError>
where
    S: AccountStore + ?Sized,
{
    match store.get(id)? {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(LedgerError::account_not_found(id)),
    }
}
