//! Rent vs Buy Decision Agent CLI
//!
//! # Usage
//!
//! ```bash
//! # Compute a decision
//! rentbuy decide --rent 15000 --price 3000000 --rate 3.5 --fee 5000
//!
//! # Decide from an input file
//! rentbuy decide --inputs household.yaml --format json
//!
//! # Print the input contract
//! rentbuy defaults --format yaml
//!
//! # Run the HTTP handler
//! rentbuy serve --host 0.0.0.0 --port 8080
//! ```
//!
//! # Exit Codes
//!
//! - 0: Buying wins
//! - 1: Renting wins
//! - 2: Buying wins, but the margin is thin
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use rentbuy_decision::{run_cli, DecideCli};

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = DecideCli::parse();

    // Run the CLI and exit with appropriate code
    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
