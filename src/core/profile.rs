//! Ledger profiles
//!
//! The two deployments of the ledger differ only in their primary record
//! shape and in the records written at initialization.

use crate::core::traits::LedgerProfile;
use crate::types::{ServiceAccount, Tariff, VehicleAccount};

/// Parking/toll service ledger
///
/// Tracks payments received by a service account that also carries its tariff.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkingLedger;

impl LedgerProfile for ParkingLedger {
    type Account = ServiceAccount;

    const NAME: &'static str = "parking";

    fn seed_accounts() -> Vec<ServiceAccount> {
        vec![ServiceAccount::new("Parking", 0, 10)]
    }
}

/// Vehicle/rider ledger
///
/// Tracks a vehicle balance that pays for a fixed list of services.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiderLedger;

impl LedgerProfile for RiderLedger {
    type Account = VehicleAccount;

    const NAME: &'static str = "rider";

    fn seed_accounts() -> Vec<VehicleAccount> {
        vec![VehicleAccount::new("1", 1000)]
    }

    fn seed_tariffs() -> Vec<Tariff> {
        vec![
            Tariff::new("Wash", 15),
            Tariff::new("Parking", 20),
            Tariff::new("Toll", 10),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BalanceRecord;
    use std::collections::HashSet;

    fn seed_keys<P: LedgerProfile>() -> Vec<String> {
        P::seed_accounts()
            .iter()
            .map(|a| a.id().to_string())
            .chain(P::seed_tariffs().into_iter().map(|t| t.id))
            .collect()
    }

    #[test]
    fn test_seed_keys_are_unique() {
        for keys in [seed_keys::<ParkingLedger>(), seed_keys::<RiderLedger>()] {
            let unique: HashSet<&String> = keys.iter().collect();
            assert_eq!(unique.len(), keys.len(), "duplicate seed key in {keys:?}");
        }
    }

    #[test]
    fn test_parking_seed() {
        assert_eq!(
            ParkingLedger::seed_accounts(),
            vec![ServiceAccount::new("Parking", 0, 10)]
        );
        assert!(ParkingLedger::seed_tariffs().is_empty());
    }

    #[test]
    fn test_rider_seed() {
        assert_eq!(
            RiderLedger::seed_accounts(),
            vec![VehicleAccount::new("1", 1000)]
        );
        assert_eq!(RiderLedger::seed_tariffs().len(), 3);
    }
}
