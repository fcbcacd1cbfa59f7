//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading of invocation records from a script for the async
//! strategy.
//!
//! # Architecture
//!
//! ```text
//! Script → csv-async records stream → AsyncReader → Batches of InvocationRecords
//!                                          ↓
//!                                   csv_format::convert_record
//! ```
//!
//! Rows that fail to parse or convert are logged and skipped. They still
//! consume a sequence number, exactly as in the sync reader.

use crate::io::csv_format::convert_record;
use crate::types::{InvocationRecord, Sequence};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    seq: Sequence,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a reader over a script with a header row
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self { csv_reader, seq: 0 }
    }

    /// Read up to `batch_size` rows
    ///
    /// Returns `None` once the input is exhausted. A returned batch may hold
    /// fewer records than rows read when some rows were skipped, and may even
    /// be empty.
    pub async fn read_batch(&mut self, batch_size: usize) -> Option<Vec<InvocationRecord>> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut rows_read = 0;
        let mut rows = self.csv_reader.records();

        while rows_read < batch_size {
            let row = match rows.next().await {
                Some(row) => row,
                None => break,
            };
            rows_read += 1;
            self.seq += 1;

            match row {
                Ok(row) => {
                    let fields: Vec<&str> = row.iter().collect();
                    match convert_record(self.seq, &fields) {
                        Ok(record) => batch.push(record),
                        Err(e) => {
                            tracing::warn!(line = self.seq + 1, error = %e, "skipping script row")
                        }
                    }
                }
                Err(e) => tracing::warn!(line = self.seq + 1, error = %e, "CSV parse error"),
            }
        }

        if rows_read == 0 {
            return None;
        }

        Some(batch)
    }
}
