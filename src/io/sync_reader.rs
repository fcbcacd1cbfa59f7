//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over invocation records from a script file.
//! Delegates row conversion to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<InvocationRecord, String>` for each data row:
//!
//! ```no_run
//! use rust_account_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Every data row consumes one sequence number, including rows that fail to
//! convert, so numbering matches the script's row order.

use crate::io::csv_format::convert_record;
use crate::types::{InvocationRecord, Sequence};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader that yields invocation records
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    row: StringRecord,
    seq: Sequence,
}

impl SyncReader {
    /// Open a script file
    ///
    /// The header row is skipped, rows may have any number of fields and
    /// every field is trimmed.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            row: StringRecord::new(),
            seq: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<InvocationRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => {
                self.seq += 1;
                let fields: Vec<&str> = self.row.iter().collect();
                // Header occupies line 1
                Some(
                    convert_record(self.seq, &fields)
                        .map_err(|e| format!("Line {}: {}", self.seq + 1, e)),
                )
            }
            Ok(false) => None,
            Err(e) => {
                self.seq += 1;
                Some(Err(format!("Line {}: CSV parse error: {}", self.seq + 1, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryPoint;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_reader_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_sync_reader_reads_rows_of_any_width() {
        let file = create_temp_csv(
            "entry,function,arg1,arg2\n\
             init,\n\
             invoke, credit , Parking , 25\n\
             query,queryBalance,Parking\n",
        );

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].as_ref().unwrap(),
            &InvocationRecord::new(1, EntryPoint::Init, "", &[])
        );
        assert_eq!(
            records[1].as_ref().unwrap(),
            &InvocationRecord::new(2, EntryPoint::Invoke, "credit", &["Parking", "25"])
        );
        assert_eq!(
            records[2].as_ref().unwrap(),
            &InvocationRecord::new(3, EntryPoint::Query, "queryBalance", &["Parking"])
        );
    }

    #[test]
    fn test_sync_reader_bad_row_consumes_sequence() {
        let file = create_temp_csv(
            "entry,function\n\
             deploy,credit\n\
             query,getCost,Parking\n",
        );

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 2);
        let error = records[0].as_ref().unwrap_err();
        assert!(error.contains("Line 2"));
        assert!(error.contains("Invalid entry point"));
        assert_eq!(records[1].as_ref().unwrap().seq, 2);
    }

    #[test]
    fn test_sync_reader_header_only() {
        let file = create_temp_csv("entry,function\n");
        assert_eq!(SyncReader::new(file.path()).unwrap().count(), 0);
    }
}
