//! CLI command definitions for the Rent vs Buy Decision Agent
//!
//! Clap-based commands for computing a decision from flags or an input
//! file, printing the input contract, and serving the HTTP handler.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use super::output::{DecisionOutput, InputContractOutput, OutputFormat};
use super::ExitCode;
use crate::engine::DecisionEngine;
use crate::error::DecisionError;
use crate::inputs::DecisionInputs;
use crate::telemetry::DecisionRecord;

/// Rent vs Buy Decision Agent CLI
///
/// Compute whether buying beats renting from six numeric parameters,
/// inspect the input contract, or run the HTTP decision handler.
#[derive(Parser, Debug)]
#[command(name = "rentbuy")]
#[command(about = "Rent vs Buy Decision Agent - should you buy or keep renting?", long_about = None)]
#[command(version)]
pub struct DecideCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: DecideCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum DecideCommands {
    /// Compute a rent-vs-buy decision
    ///
    /// Values come from flags, an optional input file (JSON/YAML/TOML),
    /// or the defaults, in that order of precedence. Out-of-range values
    /// are silently clamped, never rejected.
    Decide {
        /// Monthly rent paid today
        #[arg(long)]
        rent: Option<f64>,

        /// Purchase price of the property
        #[arg(long)]
        price: Option<f64>,

        /// Cash paid upfront (raised to 15% of the price if below)
        #[arg(long)]
        downpayment: Option<f64>,

        /// Annual mortgage interest rate, percent
        #[arg(long)]
        rate: Option<f64>,

        /// Monthly association/maintenance fee
        #[arg(long)]
        fee: Option<f64>,

        /// Expected cumulative price change, percent
        #[arg(long, allow_negative_numbers = true)]
        price_change: Option<f64>,

        /// Path to an input file (json, yaml, yml, toml)
        #[arg(short, long)]
        inputs: Option<PathBuf>,

        /// Output format for the decision
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,

        /// Skip the structured decision record log line
        #[arg(long)]
        no_record: bool,
    },

    /// Print the default inputs and per-field bounds
    Defaults {
        /// Output format for the input contract
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Run the HTTP decision handler
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

/// Execute the decide command
#[allow(clippy::too_many_arguments)]
pub fn execute_decide(
    rent: Option<f64>,
    price: Option<f64>,
    downpayment: Option<f64>,
    rate: Option<f64>,
    fee: Option<f64>,
    price_change: Option<f64>,
    inputs_file: Option<PathBuf>,
    format: Option<OutputFormat>,
    no_record: bool,
) -> Result<ExitCode, DecisionError> {
    let mut inputs = match &inputs_file {
        Some(path) => parse_inputs_file(path)?,
        None => DecisionInputs::default(),
    };

    // Flags override file values; everything is clamped afterwards
    if let Some(value) = rent {
        inputs.current_rent = value;
    }
    if let Some(value) = price {
        inputs.set_purchase_price(value);
    }
    if let Some(value) = downpayment {
        inputs.downpayment = value;
    }
    if let Some(value) = rate {
        inputs.interest_rate = value;
    }
    if let Some(value) = fee {
        inputs.monthly_fee = value;
    }
    if let Some(value) = price_change {
        inputs.price_change = value;
    }
    let inputs = inputs.clamped();

    let decision = DecisionEngine::new().evaluate(&inputs);

    if !no_record {
        DecisionRecord::from_decision(&inputs, &decision, "cli").log();
    }

    let output_format = format.unwrap_or(OutputFormat::Table);
    let output = DecisionOutput::from_decision(&inputs, &decision);
    output.render(output_format)?;

    Ok(ExitCode::from_verdict(decision.verdict))
}

/// Execute the defaults command
pub fn execute_defaults(format: Option<OutputFormat>) -> Result<ExitCode, DecisionError> {
    let output_format = format.unwrap_or(OutputFormat::Table);
    let output = InputContractOutput::new();
    output.render(output_format)?;
    Ok(ExitCode::Buy)
}

/// Execute the serve command
pub fn execute_serve(host: String, port: u16) -> Result<ExitCode, DecisionError> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| DecisionError::InternalError(e.to_string()))?;
    runtime.block_on(crate::handler::serve(&host, port))?;
    Ok(ExitCode::Buy)
}

/// Parse an input file based on its extension
pub fn parse_inputs_file(path: &Path) -> Result<DecisionInputs, DecisionError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DecisionError::FileError(format!(
            "Failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => serde_json::from_str(&content)
            .map_err(|e| DecisionError::ParseError(format!("Invalid JSON: {}", e))),
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| DecisionError::ParseError(format!("Invalid YAML: {}", e))),
        "toml" => toml::from_str(&content)
            .map_err(|e| DecisionError::ParseError(format!("Invalid TOML: {}", e))),
        _ => Err(DecisionError::InvalidInput(format!(
            "Unsupported file format: {}. Supported formats: json, yaml, yml, toml",
            extension
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_inputs_json() {
        let path = write_temp(
            "rentbuy_test_inputs.json",
            r#"{"current_rent": 12000.0, "monthly_fee": 4000.0}"#,
        );
        let inputs = parse_inputs_file(&path).unwrap();
        assert_eq!(inputs.current_rent, 12_000.0);
        assert_eq!(inputs.monthly_fee, 4_000.0);
        assert_eq!(inputs.purchase_price, 3_000_000.0);
    }

    #[test]
    fn test_parse_inputs_yaml() {
        let path = write_temp("rentbuy_test_inputs.yaml", "current_rent: 9000.0\n");
        let inputs = parse_inputs_file(&path).unwrap();
        assert_eq!(inputs.current_rent, 9_000.0);
    }

    #[test]
    fn test_parse_inputs_toml() {
        let path = write_temp("rentbuy_test_inputs.toml", "interest_rate = 2.5\n");
        let inputs = parse_inputs_file(&path).unwrap();
        assert_eq!(inputs.interest_rate, 2.5);
    }

    #[test]
    fn test_parse_inputs_unsupported_extension() {
        let path = write_temp("rentbuy_test_inputs.txt", "rent 1000");
        assert!(matches!(
            parse_inputs_file(&path),
            Err(DecisionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_inputs_missing_file() {
        let path = PathBuf::from("/nonexistent/rentbuy.json");
        assert!(matches!(
            parse_inputs_file(&path),
            Err(DecisionError::FileError(_))
        ));
    }

    #[test]
    fn test_execute_decide_default_is_maybe() {
        let code = execute_decide(
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            Some(OutputFormat::Json),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::Maybe);
    }

    #[test]
    fn test_execute_decide_flags_flip_verdict() {
        // High fee forces the No verdict
        let code = execute_decide(
            None,
            None,
            None,
            None,
            Some(30_000.0),
            None,
            None,
            Some(OutputFormat::Json),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::DontBuy);

        // Cheap loan plus high rent forces the Yes verdict
        let code = execute_decide(
            Some(40_000.0),
            None,
            None,
            Some(1.0),
            Some(500.0),
            None,
            None,
            Some(OutputFormat::Json),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::Buy);
    }

    #[test]
    fn test_execute_decide_nan_price_flag() {
        // clap parses "NaN" into f64; the input layer corrects it to the
        // bound minimum instead of aborting. Price 0 means nothing to
        // finance, so buying trivially wins.
        let code = execute_decide(
            None,
            Some(f64::NAN),
            None,
            None,
            None,
            None,
            None,
            Some(OutputFormat::Json),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::Buy);
    }

    #[test]
    fn test_cli_parses_decide_command() {
        let cli = DecideCli::try_parse_from([
            "rentbuy",
            "decide",
            "--rent",
            "12000",
            "--price-change",
            "-5",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            DecideCommands::Decide {
                rent, price_change, ..
            } => {
                assert_eq!(rent, Some(12_000.0));
                assert_eq!(price_change, Some(-5.0));
            }
            _ => panic!("expected decide command"),
        }
    }

    #[test]
    fn test_cli_parses_serve_defaults() {
        let cli = DecideCli::try_parse_from(["rentbuy", "serve"]).unwrap();
        match cli.command {
            DecideCommands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8080);
            }
            _ => panic!("expected serve command"),
        }
    }
}
