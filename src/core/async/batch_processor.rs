//! Batch processing with key-based partitioning for the async host
//!
//! This module provides the `BatchProcessor` struct, which runs a batch of
//! invocations concurrently while producing exactly the outcomes a sequential
//! run would.
//!
//! # Design
//!
//! Every invocation reports a [`Footprint`] before it runs. A batch is first
//! cut into segments at each `Global` invocation (initialization), which runs
//! alone once everything before it has finished. Inside a segment, invocations
//! are grouped by the single key they touch and each group runs sequentially
//! on its own tokio task. Invocations that will fail before store access share
//! one extra group.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     ├── Arc<dyn Chaincode>  (shared dispatcher)
//!     └── SharedStore         (Arc<DashMap> world state)
//! ```
//!
//! Outcomes are returned sorted by sequence number.

use std::collections::HashMap;
use std::sync::Arc;

use super::SharedStore;
use crate::core::executor::execute;
use crate::core::traits::Chaincode;
use crate::types::{Footprint, InvocationOutcome, InvocationRecord};

/// Group of invocations that must run in order on one task
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionKey {
    /// Invocations touching this key
    Key(String),

    /// Invocations that never reach the store
    Isolated,
}

/// Slice of a batch between two global invocations
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A single invocation that may write any key
    Global(InvocationRecord),

    /// Invocations touching at most one key each
    Partitioned(Vec<InvocationRecord>),
}

/// Batch processor with key-based partitioning
#[derive(Clone)]
pub struct BatchProcessor {
    chaincode: Arc<dyn Chaincode>,
    store: SharedStore,
}

impl BatchProcessor {
    pub fn new(chaincode: Arc<dyn Chaincode>, store: SharedStore) -> Self {
        Self { chaincode, store }
    }

    /// Handle onto the world state this processor writes to
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Cut a batch at every global invocation
    ///
    /// Concatenating the segments yields the batch in its original order.
    pub fn segment(&self, batch: Vec<InvocationRecord>) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for record in batch {
            if self.footprint(&record) == Footprint::Global {
                if !current.is_empty() {
                    segments.push(Segment::Partitioned(std::mem::take(&mut current)));
                }
                segments.push(Segment::Global(record));
            } else {
                current.push(record);
            }
        }

        if !current.is_empty() {
            segments.push(Segment::Partitioned(current));
        }

        segments
    }

    /// Group invocations by the key they touch
    ///
    /// Each invocation lands in exactly one group and keeps its relative order.
    pub fn partition_by_key(
        &self,
        records: Vec<InvocationRecord>,
    ) -> HashMap<PartitionKey, Vec<InvocationRecord>> {
        let mut partitions: HashMap<PartitionKey, Vec<InvocationRecord>> = HashMap::new();

        for record in records {
            let key = match self.footprint(&record) {
                Footprint::Key(key) => PartitionKey::Key(key),
                Footprint::Isolated | Footprint::Global => PartitionKey::Isolated,
            };
            partitions.entry(key).or_default().push(record);
        }

        partitions
    }

    /// Run a group of invocations in order against the shared store
    pub fn process_partition(&self, records: Vec<InvocationRecord>) -> Vec<InvocationOutcome> {
        let mut store = self.store.clone();

        records
            .iter()
            .map(|record| execute(self.chaincode.as_ref(), &mut store, record))
            .collect()
    }

    /// Process a batch and return its outcomes sorted by sequence number
    ///
    /// # Errors
    ///
    /// Returns an error if a partition task panicked. Its outcomes would be
    /// missing, so the batch is reported as failed rather than truncated.
    pub async fn process_batch(
        &self,
        batch: Vec<InvocationRecord>,
    ) -> Result<Vec<InvocationOutcome>, String> {
        let mut outcomes = Vec::with_capacity(batch.len());

        for segment in self.segment(batch) {
            match segment {
                Segment::Global(record) => {
                    outcomes.extend(self.process_partition(vec![record]));
                }
                Segment::Partitioned(records) => {
                    outcomes.extend(self.process_segment(records).await?);
                }
            }
        }

        outcomes.sort_by_key(|outcome| outcome.seq);
        Ok(outcomes)
    }

    async fn process_segment(
        &self,
        records: Vec<InvocationRecord>,
    ) -> Result<Vec<InvocationOutcome>, String> {
        let partitions = self.partition_by_key(records);
        tracing::debug!(partitions = partitions.len(), "processing segment");

        let mut tasks = Vec::with_capacity(partitions.len());
        for (_key, records) in partitions {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move { processor.process_partition(records) }));
        }

        let mut outcomes = Vec::new();
        for task in tasks {
            let partition = task
                .await
                .map_err(|e| format!("Partition task failed: {}", e))?;
            outcomes.extend(partition);
        }

        Ok(outcomes)
    }

    fn footprint(&self, record: &InvocationRecord) -> Footprint {
        self.chaincode
            .footprint(record.entry, &record.function, &record.args)
    }
}
