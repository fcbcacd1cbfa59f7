//! Asynchronous batch processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. It reads the script in batches and runs each
//! batch through the key-partitioning `BatchProcessor`.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (key partitioning + tokio tasks)
//!         ├── Arc<dyn Chaincode>
//!         └── SharedStore (Arc<DashMap> world state)
//! ```
//!
//! # Ordering
//!
//! Batches are processed one after another, so an invocation never runs
//! before one that precedes it in the script and touches the same key.
//! Results are written in sequence order, which makes the output identical
//! to the synchronous strategy's.

use crate::core::{BatchProcessor, Chaincode, SharedStore};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::ResultWriter;
use crate::strategy::ProcessingStrategy;
use crate::types::WorldState;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how many invocations are read per batch and the number of
/// worker threads that run key groups in parallel.
///
/// Both values are always at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    batch_size: usize,
    worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get().max(1),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values are replaced by the defaults with a warning.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                worker_threads,
                default = default.worker_threads,
                "invalid worker_threads, using default"
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }

    /// Number of script rows per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of runtime worker threads running key groups
    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }
}

/// Asynchronous batch processing strategy
#[derive(Clone)]
pub struct AsyncProcessingStrategy {
    chaincode: Arc<dyn Chaincode>,
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(chaincode: Arc<dyn Chaincode>, config: BatchConfig) -> Self {
        Self { chaincode, config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<WorldState, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads())
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let store = SharedStore::new();
            let processor = BatchProcessor::new(Arc::clone(&self.chaincode), store.clone());

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // csv-async reads through the futures-io traits
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);
            let mut writer = ResultWriter::new(output)?;
            let mut executed = 0usize;

            while let Some(batch) = reader.read_batch(self.config.batch_size()).await {
                let outcomes = processor.process_batch(batch).await?;
                for outcome in &outcomes {
                    writer.write_outcome(outcome)?;
                }
                executed += outcomes.len();
            }

            writer.finish()?;
            tracing::info!(
                ledger = self.chaincode.name(),
                executed,
                keys = store.len(),
                "script complete"
            );

            Ok(store.snapshot())
        })
    }
}
