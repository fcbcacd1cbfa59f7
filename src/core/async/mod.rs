//! Asynchronous host components
//!
//! This module provides the thread-safe pieces the async strategy runs on:
//!
//! - **SharedStore**: world state behind `Arc<DashMap>`, one handle per task
//! - **BatchProcessor**: partitions a batch by key and runs each group on
//!   its own tokio task
//!
//! # Thread Safety
//!
//! Invocations touching different keys proceed in parallel. Invocations on
//! the same key run in script order on one task, and initialization runs
//! alone between the segments around it.

pub mod batch_processor;
pub mod shared_store;

pub use batch_processor::{BatchProcessor, PartitionKey, Segment};
pub use shared_store::SharedStore;
