//! Account record types for the account ledger
//!
//! This module defines the record shapes stored in the world state and the
//! [`BalanceRecord`] trait the state machine is generic over.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Account identifier, also the store key of the record
pub type AccountId = String;

/// Balances, costs and transfer amounts
pub type Amount = i64;

/// A record that holds a mutable balance
///
/// Implemented by every record type a ledger profile can credit or debit.
pub trait BalanceRecord:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Human-readable name of the record shape, used in decode errors
    const KIND: &'static str;

    /// Key the record is stored under
    fn id(&self) -> &str;

    /// Current balance
    fn balance(&self) -> Amount;

    /// Replace the balance
    fn set_balance(&mut self, balance: Amount);
}

/// A vehicle (rider) account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAccount {
    pub id: AccountId,
    pub balance: Amount,
}

impl VehicleAccount {
    pub fn new(id: impl Into<AccountId>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }
}

impl BalanceRecord for VehicleAccount {
    const KIND: &'static str = "vehicle account";

    fn id(&self) -> &str {
        &self.id
    }

    fn balance(&self) -> Amount {
        self.balance
    }

    fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }
}

/// A service account that collects payments
///
/// `cost` is the fixed tariff of the service. It is set when the account is
/// seeded and no operation changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccount {
    pub id: AccountId,
    pub balance: Amount,
    pub cost: Amount,
}

impl ServiceAccount {
    pub fn new(id: impl Into<AccountId>, balance: Amount, cost: Amount) -> Self {
        Self {
            id: id.into(),
            balance,
            cost,
        }
    }
}

impl BalanceRecord for ServiceAccount {
    const KIND: &'static str = "service account";

    fn id(&self) -> &str {
        &self.id
    }

    fn balance(&self) -> Amount {
        self.balance
    }

    fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }
}

/// A fixed-cost service entry without a balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: AccountId,
    pub cost: Amount,
}

impl Tariff {
    pub fn new(id: impl Into<AccountId>, cost: Amount) -> Self {
        Self {
            id: id.into(),
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_balance_keeps_identity_and_cost() {
        let mut account = ServiceAccount::new("Parking", 0, 10);
        account.set_balance(25);

        assert_eq!(account.id(), "Parking");
        assert_eq!(account.balance(), 25);
        assert_eq!(account.cost, 10);
    }

    #[test]
    fn test_vehicle_account_balance_accessors() {
        let mut account = VehicleAccount::new("1", 1000);
        assert_eq!(account.balance(), 1000);

        account.set_balance(400);
        assert_eq!(account, VehicleAccount::new("1", 400));
    }

    #[test]
    fn test_record_kinds_are_distinct() {
        assert_ne!(VehicleAccount::KIND, ServiceAccount::KIND);
    }
}
