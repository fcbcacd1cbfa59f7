//! End-to-end integration tests
//!
//! These tests validate the complete host pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Runs every invocation against a fresh world state
//! 3. Compares the results CSV with expected.csv
//! 4. Compares the final world state with state.csv, when present
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy paths for both deployments, through canonical names and aliases
//! - Insufficient balance rejections
//! - Argument errors (arity, malformed and non-positive amounts, overflow)
//! - Missing accounts and records of the wrong shape
//! - Unknown operations and operations sent to the wrong entry point
//! - Re-initialization
//!
//! Each fixture is run twice: once with the sync host and once with the async host.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_account_ledger::cli::{LedgerKind, StrategyType};
    use rust_account_ledger::io::write_state_csv;
    use rust_account_ledger::strategy::{create_strategy, BatchConfig};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture and compare its results (and final state) with the expected files
    fn run_test_fixture(fixture_name: &str, ledger: LedgerKind, strategy_type: StrategyType) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);
        let state_path = format!("{}/state.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        // Small batches force the async host across several batch boundaries
        let config = Some(BatchConfig::new(3, 4));
        let strategy = create_strategy(strategy_type, ledger, config)
            .unwrap_or_else(|e| panic!("Failed to create strategy: {}", e));

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        let state = strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );

        if Path::new(&state_path).exists() {
            let mut actual_state = Vec::new();
            write_state_csv(&state, &mut actual_state).expect("Failed to write state");
            let actual_state = String::from_utf8(actual_state).expect("State is not UTF-8");
            let expected_state = fs::read_to_string(&state_path)
                .unwrap_or_else(|e| panic!("Failed to read state file {}: {}", state_path, e));

            assert_eq!(
                actual_state, expected_state,
                "\n\nState mismatch for fixture: {} (strategy: {:?})\n",
                fixture_name, strategy_type
            );
        }
    }

    /// End-to-end test for all fixtures with both host strategies
    #[rstest]
    #[case("parking_happy_path", LedgerKind::Parking)]
    #[case("rider_happy_path", LedgerKind::Rider)]
    #[case("insufficient_balance", LedgerKind::Rider)]
    #[case("argument_errors", LedgerKind::Parking)]
    #[case("not_found_and_schema", LedgerKind::Rider)]
    #[case("unknown_operations", LedgerKind::Parking)]
    #[case("reinitialize", LedgerKind::Rider)]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] ledger: LedgerKind,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, ledger, strategy);
    }
}
