//! I/O module
//!
//! Handles script parsing and result output.
//!
//! # Components
//!
//! - `csv_format` - Row conversion, results and world-state serialization
//! - `sync_reader` - Synchronous script reader with iterator interface
//! - `async_reader` - Asynchronous script reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_record, write_state_csv, ResultWriter};
pub use sync_reader::SyncReader;
