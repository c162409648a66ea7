//! Rent vs Buy Decision Agent
//!
//! An agent that decides whether buying a property beats renting, from six
//! numeric parameters: current rent, purchase price, downpayment, interest
//! rate, monthly fee, and expected price change. The outcome is one of
//! three verdicts (yes / maybe / no) with supporting monetary figures.
//!
//! ## Features
//!
//! - **Pure decision engine**: deterministic, synchronous, no failure modes
//! - **Silent clamping**: out-of-range input is corrected, never rejected;
//!   the downpayment is always at least 15% of the price
//! - **CLI support**: flags or JSON/YAML/TOML input files, verdict-driven
//!   exit codes, table/JSON/YAML output
//! - **HTTP handler**: stateless axum routes with a machine-readable
//!   API envelope
//! - **Telemetry**: Prometheus metrics and structured decision records
//!
//! ## Architecture
//!
//! 1. **Inputs** (`inputs`): the immutable six-field snapshot, per-field
//!    bounds, and the clamping rules.
//! 2. **Engine** (`engine`): the pure decision function and its breakdown
//!    figures.
//! 3. **Session** (`session`): the two-state input/result machine with
//!    calculate, reset, and clear.
//! 4. **CLI** (`cli`): clap commands with colored table output.
//! 5. **Handler** (`handler`): axum routes for edge deployment.
//! 6. **Telemetry** (`telemetry`): metrics and decision record emission.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Decide with explicit values
//! rentbuy decide --rent 15000 --price 3000000 --downpayment 450000 --rate 3.5 --fee 5000
//!
//! # Decide from an input file, machine-readable output
//! rentbuy decide --inputs household.yaml --format json
//!
//! # Inspect the input contract
//! rentbuy defaults
//!
//! # Run the HTTP handler
//! rentbuy serve --port 8080
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rentbuy_decision::{DecisionEngine, DecisionInputs, Verdict};
//!
//! let engine = DecisionEngine::new();
//! let decision = engine.evaluate(&DecisionInputs::default());
//! assert_eq!(decision.verdict, Verdict::Maybe);
//! ```

// Core modules
pub mod cli;
pub mod engine;
pub mod error;
pub mod handler;
pub mod inputs;
pub mod session;
pub mod telemetry;

// Re-export commonly used types
pub use engine::{Breakdown, Decision, DecisionEngine, Verdict};
pub use error::{DecisionError, Result};
pub use inputs::{DecisionInputs, FieldBounds, FieldSpec, MIN_DOWNPAYMENT_RATIO};
pub use session::{CalculatorSession, SessionState};

// Re-export handler types for edge deployment
pub use handler::{
    create_router, ApiError, ApiResponse, DecideRequest, DecideResponse, ErrorInfo,
    HandlerState, HealthResponse, HealthStatus,
};

// Re-export telemetry types
pub use telemetry::{
    DecisionMetrics, DecisionMetricsRegistry, DecisionRecord, TelemetryConfig, TelemetryError,
};

// Re-export CLI types for command-line usage
pub use cli::{DecideCli, DecideCommands, ExitCode, OutputFormat};

/// Agent version (from Cargo.toml)
pub const AGENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Agent identifier
pub const AGENT_ID: &str = "rentbuy-decision-agent";

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
pub fn run_cli(cli: DecideCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                DecisionError::FileError(_) => ExitCode::FileError,
                _ if e.is_user_error() => ExitCode::InvalidInput,
                _ => ExitCode::InternalError,
            }
        }
    }
}
