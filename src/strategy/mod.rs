//! Processing strategy module for invocation scripts
//!
//! This module defines the Strategy pattern for complete host pipelines,
//! covering script parsing, invocation execution and result output. This
//! allows the synchronous and asynchronous hosts to be selected at runtime.

use crate::cli::{LedgerKind, StrategyType};
use crate::core::{Chaincode, Dispatcher, ParkingLedger, RiderLedger};
use crate::types::{LedgerError, WorldState};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete host pipelines
///
/// Each strategy reads invocations from a script, runs them against a fresh
/// world state and writes one result row per invocation to `output`.
pub trait ProcessingStrategy: Send + Sync {
    /// Run the script at `input_path` and write results to `output`
    ///
    /// Rejected invocations are reported in the results, not as errors.
    ///
    /// # Returns
    ///
    /// The final world state.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be opened, the output cannot be
    /// written, or the host itself fails.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<WorldState, String>;
}

/// Build the chaincode for a ledger deployment
pub fn create_chaincode(ledger: LedgerKind) -> Result<Arc<dyn Chaincode>, LedgerError> {
    let chaincode: Arc<dyn Chaincode> = match ledger {
        LedgerKind::Parking => Arc::new(Dispatcher::<ParkingLedger>::new()?),
        LedgerKind::Rider => Arc::new(Dispatcher::<RiderLedger>::new()?),
    };
    Ok(chaincode)
}

/// Factory function to create a processing strategy
///
/// `config` is only used by the async strategy; `None` selects the defaults.
///
/// # Errors
///
/// Returns an error if the chaincode's operation table is invalid.
pub fn create_strategy(
    strategy_type: StrategyType,
    ledger: LedgerKind,
    config: Option<BatchConfig>,
) -> Result<Box<dyn ProcessingStrategy>, String> {
    let chaincode = create_chaincode(ledger).map_err(|e| e.to_string())?;

    let strategy: Box<dyn ProcessingStrategy> = match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(chaincode)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(chaincode, config))
        }
    };

    Ok(strategy)
}
