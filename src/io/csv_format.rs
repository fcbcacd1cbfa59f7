//! CSV format handling for invocation scripts, results and state dumps
//!
//! This module centralizes all CSV format concerns, providing:
//! - Conversion from script rows to invocation records
//! - Result serialization (`seq,entry,function,outcome,payload`)
//! - World-state serialization (`key,record`)

use crate::types::{EntryPoint, InvocationOutcome, InvocationRecord, Sequence, WorldState};
use csv::Writer;
use std::io::Write;

/// Header of the results file
pub const RESULT_HEADER: [&str; 5] = ["seq", "entry", "function", "outcome", "payload"];

/// Header of the world-state dump
pub const STATE_HEADER: [&str; 2] = ["key", "record"];

/// Convert the fields of one script row into an InvocationRecord
///
/// The first field is the entry point, the second the operation name and the
/// rest are passed through as arguments. A row with only an entry point gets
/// an empty operation name.
///
/// # Errors
///
/// Returns an error if the row is empty or the entry point is not `init`,
/// `invoke` or `query`.
pub fn convert_record(seq: Sequence, fields: &[&str]) -> Result<InvocationRecord, String> {
    let (entry, rest) = fields
        .split_first()
        .ok_or_else(|| format!("Empty row for invocation {}", seq))?;

    let entry: EntryPoint = entry
        .parse()
        .map_err(|e| format!("{} for invocation {}", e, seq))?;

    let (function, args) = rest.split_first().map_or(("", &[][..]), |(f, a)| (*f, a));

    Ok(InvocationRecord::new(seq, entry, function, args))
}

/// Streams invocation outcomes as CSV rows
pub struct ResultWriter<'a> {
    writer: Writer<&'a mut dyn Write>,
}

impl<'a> ResultWriter<'a> {
    /// Create a writer and emit the header row
    pub fn new(output: &'a mut dyn Write) -> Result<Self, String> {
        let mut writer = Writer::from_writer(output);

        writer
            .write_record(RESULT_HEADER)
            .map_err(|e| format!("Failed to write CSV header: {}", e))?;

        Ok(Self { writer })
    }

    /// Write one outcome row
    ///
    /// `outcome` is `ok` or the error class; `payload` is the query payload,
    /// empty for mutations, or the error message.
    pub fn write_outcome(&mut self, outcome: &InvocationOutcome) -> Result<(), String> {
        let (status, payload) = match &outcome.result {
            Ok(Some(bytes)) => ("ok", String::from_utf8_lossy(bytes).into_owned()),
            Ok(None) => ("ok", String::new()),
            Err(e) => (e.class().as_str(), e.to_string()),
        };

        self.writer
            .write_record([
                outcome.seq.to_string().as_str(),
                outcome.entry.as_str(),
                outcome.function.as_str(),
                status,
                payload.as_str(),
            ])
            .map_err(|e| format!("Failed to write result for invocation {}: {}", outcome.seq, e))
    }

    /// Flush buffered rows to the underlying output
    pub fn finish(mut self) -> Result<(), String> {
        self.writer
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))
    }
}

/// Write a world-state dump to CSV format
///
/// One row per key in key order. Records are written as stored, decoded as
/// UTF-8 text.
pub fn write_state_csv(state: &WorldState, output: &mut dyn Write) -> Result<(), String> {
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(STATE_HEADER)
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for (key, record) in state {
        writer
            .write_record([key.as_str(), &*String::from_utf8_lossy(record)])
            .map_err(|e| format!("Failed to write state record '{}': {}", key, e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
