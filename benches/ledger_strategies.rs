//! Benchmark suite for comparing host strategies
//!
//! This benchmark compares the sync and async hosts on generated rider
//! scripts using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each script starts with initialization and then cycles through debits,
//! credits and queries spread over the vehicle, the tariff keys and a key
//! that was never written.

use rust_account_ledger::cli::{LedgerKind, StrategyType};
use rust_account_ledger::strategy::{create_strategy, BatchConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const ROWS: &[&str] = &[
    "invoke,sendPayment,1,1",
    "query,getCost,Wash",
    "invoke,recievePayment,1,2",
    "query,checkBalance,1",
    "query,getCost,Toll",
    "invoke,sendPayment,Garage,5",
    "query,getCost,Parking",
    "invoke,transferAll,1",
];

/// Write a script with `rows` invocations after the initial `init`
fn write_script(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "entry,function,arg1,arg2").expect("Failed to write header");
    writeln!(file, "init,").expect("Failed to write init row");
    for row in ROWS.iter().cycle().take(rows) {
        writeln!(file, "{}", row).expect("Failed to write row");
    }
    file.flush().expect("Failed to flush script");
    file
}

/// Benchmark the sync host
#[divan::bench(args = [100, 1_000, 100_000])]
fn sync_strategy(bencher: divan::Bencher, rows: usize) {
    let script = write_script(rows);
    let strategy = create_strategy(StrategyType::Sync, LedgerKind::Rider, None)
        .expect("Failed to create strategy");

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(script.path(), &mut output)
            .expect("Processing failed")
    });
}

/// Benchmark the async host with default batching
#[divan::bench(args = [100, 1_000, 100_000])]
fn async_strategy(bencher: divan::Bencher, rows: usize) {
    let script = write_script(rows);
    let strategy = create_strategy(
        StrategyType::Async,
        LedgerKind::Rider,
        Some(BatchConfig::default()),
    )
    .expect("Failed to create strategy");

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(script.path(), &mut output)
            .expect("Processing failed")
    });
}
