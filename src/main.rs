//! Account Ledger CLI
//!
//! Runs a ledger invocation script and writes one result row per invocation.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > results.csv
//! cargo run -- --ledger rider script.csv > results.csv
//! cargo run -- --strategy async --batch-size 2000 --workers 8 script.csv > results.csv
//! cargo run -- --ledger rider --state-out state.csv script.csv > results.csv
//! ```
//!
//! Results go to stdout, logs to stderr (`--log-level`, or `RUST_LOG`).
//!
//! # Exit Codes
//!
//! - 0: Success, including scripts whose invocations were rejected
//! - 1: Error (missing arguments, unreadable script, unwritable output, etc.)

use rust_account_ledger::{cli, io, strategy};
use std::fs::File;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing(&args.log_level);

    let config = if matches!(args.strategy, cli::StrategyType::Async) {
        Some(args.to_batch_config())
    } else {
        None
    };

    let strategy = match strategy::create_strategy(args.strategy, args.ledger, config) {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout();
    let state = match strategy.process(&args.input_file, &mut output) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = &args.state_out {
        let written = File::create(path)
            .map_err(|e| format!("Failed to create '{}': {}", path.display(), e))
            .and_then(|mut file| io::write_state_csv(&state, &mut file));

        if let Err(e) = written {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
