//! CLI module for the Rent vs Buy Decision Agent
//!
//! Command-line interface for computing decisions from flags or input
//! files, printing the input contract, and running the HTTP handler.

pub mod commands;
pub mod output;

pub use commands::{DecideCli, DecideCommands};
pub use output::{DecisionOutput, OutputFormat};

use crate::engine::Verdict;
use crate::error::DecisionError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Buying wins clearly
    Buy = 0,
    /// Renting wins
    DontBuy = 1,
    /// Buying wins but the margin is thin
    Maybe = 2,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Map a verdict onto an exit code
    pub fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Yes => ExitCode::Buy,
            Verdict::Maybe => ExitCode::Maybe,
            Verdict::No => ExitCode::DontBuy,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: DecideCli) -> Result<ExitCode, DecisionError> {
    match cli.command {
        DecideCommands::Decide {
            rent,
            price,
            downpayment,
            rate,
            fee,
            price_change,
            inputs,
            format,
            no_record,
        } => commands::execute_decide(
            rent,
            price,
            downpayment,
            rate,
            fee,
            price_change,
            inputs,
            format,
            no_record,
        ),
        DecideCommands::Defaults { format } => commands::execute_defaults(format),
        DecideCommands::Serve { host, port } => commands::execute_serve(host, port),
    }
}
