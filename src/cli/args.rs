use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Run a ledger invocation script against a fresh world state
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Run a ledger invocation script and report each outcome", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing invocation rows
    #[arg(value_name = "INPUT", help = "Path to the input CSV script")]
    pub input_file: PathBuf,

    /// Ledger deployment to run the script against
    #[arg(
        long = "ledger",
        value_name = "LEDGER",
        default_value = "parking",
        help = "Ledger deployment: 'parking' for the service ledger or 'rider' for the vehicle ledger"
    )]
    pub ledger: LedgerKind,

    /// Host strategy used to run invocations
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Host strategy: 'sync' for sequential or 'async' for key-partitioned batches"
    )]
    pub strategy: StrategyType,

    /// Number of script rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of script rows per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "workers",
        visible_alias = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Where to write the final world state
    #[arg(
        long = "state-out",
        value_name = "PATH",
        help = "Write the final world state as key,record CSV to this file"
    )]
    pub state_out: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter written to stderr (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

/// Available host strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available ledger deployments
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LedgerKind {
    /// Service account carrying its own tariff
    Parking,
    /// Vehicle account paying for fixed-cost services
    Rider,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; zero values are replaced by
    /// the defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size()),
                self.worker_threads.unwrap_or(default.worker_threads()),
            )
        } else {
            BatchConfig::default()
        }
    }
}
