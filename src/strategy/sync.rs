//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. It runs invocations one by one in script order,
//! delegating:
//! - Script parsing to `SyncReader` (iterator interface)
//! - Invocation execution to `core::execute` (one transaction per invocation)
//! - Result output to `csv_format::ResultWriter`
//!
//! Results are streamed as invocations complete, so memory usage does not
//! grow with the length of the script.

use crate::core::{execute, Chaincode, MemoryStore};
use crate::io::csv_format::ResultWriter;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::WorldState;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Synchronous processing strategy
#[derive(Clone)]
pub struct SyncProcessingStrategy {
    chaincode: Arc<dyn Chaincode>,
}

impl SyncProcessingStrategy {
    pub fn new(chaincode: Arc<dyn Chaincode>) -> Self {
        Self { chaincode }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<WorldState, String> {
        let reader = SyncReader::new(input_path)?;
        let mut writer = ResultWriter::new(output)?;
        let mut store = MemoryStore::new();
        let mut executed = 0usize;

        for result in reader {
            match result {
                Ok(record) => {
                    let outcome = execute(self.chaincode.as_ref(), &mut store, &record);
                    writer.write_outcome(&outcome)?;
                    executed += 1;
                }
                Err(e) => tracing::warn!(error = %e, "skipping script row"),
            }
        }

        writer.finish()?;
        tracing::info!(
            ledger = self.chaincode.name(),
            executed,
            keys = store.len(),
            "script complete"
        );

        Ok(store.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dispatcher, ParkingLedger, RiderLedger};
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn parking() -> SyncProcessingStrategy {
        SyncProcessingStrategy::new(Arc::new(Dispatcher::<ParkingLedger>::new().unwrap()))
    }

    #[test]
    fn test_sync_strategy_parking_scenario() {
        let file = create_temp_csv(
            "entry,function,arg1,arg2\n\
             init,\n\
             invoke,credit,Parking,25\n\
             query,queryBalance,Parking\n",
        );
        let mut output = Vec::new();

        let state = parking().process(file.path(), &mut output).unwrap();

        let expected = "seq,entry,function,outcome,payload\n\
            1,init,,ok,\n\
            2,invoke,credit,ok,\n\
            3,query,queryBalance,ok,25\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
        assert_eq!(
            state.get("Parking").unwrap(),
            &br#"{"id":"Parking","balance":25,"cost":10}"#.to_vec()
        );
    }

    #[test]
    fn test_sync_strategy_continues_after_rejections() {
        let file = create_temp_csv(
            "entry,function,arg1,arg2\n\
             init,\n\
             invoke,sendPayment,1,1500\n\
             bogus,row\n\
             query,checkBalance,1\n",
        );
        let strategy =
            SyncProcessingStrategy::new(Arc::new(Dispatcher::<RiderLedger>::new().unwrap()));
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("2,invoke,sendPayment,insufficient_balance,"));
        assert_eq!(lines[3], "4,query,checkBalance,ok,1000");
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let mut output = Vec::new();

        let result = parking().process(Path::new("nonexistent.csv"), &mut output);

        assert!(result.unwrap_err().contains("Failed to open file"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
