//! Output formatting for the Rent vs Buy Decision Agent CLI
//!
//! Renders decisions in JSON, YAML, and a human-readable table with
//! verdict-based coloring: green for buy, yellow for maybe, red for no.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::engine::{Breakdown, Decision, Verdict};
use crate::error::DecisionError;
use crate::inputs::{DecisionInputs, FieldSpec};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format for configuration output
    Yaml,
}

/// Decision output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionOutput {
    /// Verdict tag ("yes" / "maybe" / "no")
    pub verdict: Verdict,
    /// One-line headline for the verdict
    pub headline: String,
    /// Monthly savings when buying wins (0 otherwise)
    pub monthly_savings: f64,
    /// Monthly loss when renting wins (0 otherwise)
    pub monthly_loss: f64,
    /// Annual counterpart of the nonzero monthly figure
    pub annual_amount: f64,
    /// Explanatory notes for the verdict
    pub notes: Vec<String>,
    /// The snapshot the engine evaluated
    pub inputs: DecisionInputs,
    /// Supporting arithmetic
    pub breakdown: Breakdown,
}

impl DecisionOutput {
    /// Build renderable output from a decision
    pub fn from_decision(inputs: &DecisionInputs, decision: &Decision) -> Self {
        let headline = match decision.verdict {
            Verdict::Yes => "YES - you should buy".to_string(),
            Verdict::Maybe => "MAYBE - think it over carefully".to_string(),
            Verdict::No => "NO - keep renting and keep saving".to_string(),
        };

        let mut notes = Vec::new();
        match decision.verdict {
            Verdict::Yes => {
                notes.push(format!(
                    "Buying saves about {:.0} per month compared to your current rent, \
                     assuming prices change by {:.2}% over the coming period.",
                    decision.monthly_savings, decision.price_change
                ));
                notes.push(format!("Annual savings: {:.0}", decision.annual_savings()));
            }
            Verdict::Maybe => {
                notes.push(format!(
                    "Even though buying would save {:.0} per month, the annual gain \
                     is under 2.5% of the financed amount.",
                    decision.monthly_savings
                ));
                notes.push(
                    "Ownership typically costs 1-4% per year in maintenance and repairs \
                     otherwise covered by your landlord."
                        .to_string(),
                );
                notes.push(format!("Annual savings: {:.0}", decision.annual_savings()));
            }
            Verdict::No => {
                notes.push(format!(
                    "Buying would cost about {:.0} more per month than your current rent.",
                    decision.monthly_loss
                ));
                notes.push(format!("Annual loss: {:.0}", decision.annual_loss()));
                if decision.consider_future_appreciation {
                    notes.push(format!(
                        "Prices have fallen {:.2}% recently; a rebound is possible and \
                         worth weighing in your decision.",
                        decision.price_change
                    ));
                }
            }
        }
        notes.push(
            "Includes monthly fees, interest cost, and potential appreciation. \
             Loans always carry risk."
                .to_string(),
        );

        let annual_amount = if decision.should_buy {
            decision.annual_savings()
        } else {
            decision.annual_loss()
        };

        Self {
            verdict: decision.verdict,
            headline,
            monthly_savings: decision.monthly_savings,
            monthly_loss: decision.monthly_loss,
            annual_amount,
            notes,
            inputs: *inputs,
            breakdown: decision.breakdown.clone(),
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), DecisionError> {
        match format {
            OutputFormat::Json => render_json(self),
            OutputFormat::Yaml => render_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<(), DecisionError> {
        let mut stdout = io::stdout();

        let headline = match self.verdict {
            Verdict::Yes => self.headline.green().bold(),
            Verdict::Maybe => self.headline.yellow().bold(),
            Verdict::No => self.headline.red().bold(),
        };

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Rent vs Buy Decision".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();
        writeln!(stdout, "{}", headline).ok();
        writeln!(stdout).ok();

        match self.verdict {
            Verdict::Yes => {
                writeln!(
                    stdout,
                    "  Monthly savings: {}",
                    format!("{:.2}", self.monthly_savings).green().bold()
                )
                .ok();
            }
            Verdict::Maybe => {
                writeln!(
                    stdout,
                    "  Small monthly savings: {}",
                    format!("{:.2}", self.monthly_savings).yellow().bold()
                )
                .ok();
            }
            Verdict::No => {
                writeln!(
                    stdout,
                    "  Monthly loss: {}",
                    format!("{:.2}", self.monthly_loss).red().bold()
                )
                .ok();
            }
        }
        writeln!(stdout).ok();

        for note in &self.notes {
            writeln!(stdout, "  {} {}", "-".blue(), note).ok();
        }
        writeln!(stdout).ok();

        writeln!(stdout, "{}", "Breakdown:".cyan().bold()).ok();
        writeln!(
            stdout,
            "  Effective downpayment: {:>14.2}",
            self.breakdown.effective_downpayment
        )
        .ok();
        writeln!(stdout, "  Principal:             {:>14.2}", self.breakdown.principal).ok();
        writeln!(
            stdout,
            "  Monthly interest:      {:>14.2}",
            self.breakdown.monthly_interest
        )
        .ok();
        writeln!(
            stdout,
            "  Total monthly cost:    {:>14.2}",
            self.breakdown.total_monthly_cost
        )
        .ok();
        writeln!(
            stdout,
            "  Appreciation offset:   {:>14.2}",
            self.breakdown.monthly_appreciation
        )
        .ok();
        writeln!(
            stdout,
            "  Adjusted monthly cost: {:>14.2}",
            self.breakdown.adjusted_monthly_cost
        )
        .ok();

        stdout.flush().ok();
        Ok(())
    }
}

/// Defaults and per-field bounds for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputContractOutput {
    pub defaults: DecisionInputs,
    pub fields: Vec<FieldSpec>,
}

impl InputContractOutput {
    pub fn new() -> Self {
        Self {
            defaults: DecisionInputs::default(),
            fields: DecisionInputs::field_specs(),
        }
    }

    /// Render the contract in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), DecisionError> {
        match format {
            OutputFormat::Json => render_json(self),
            OutputFormat::Yaml => render_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<(), DecisionError> {
        let mut stdout = io::stdout();

        writeln!(stdout, "{}", "Input Contract".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        for field in &self.fields {
            writeln!(
                stdout,
                "  {:<16} {:<22} step {:<8} default {}",
                field.field.bold(),
                field.bounds.describe(),
                field.step,
                field.default
            )
            .ok();
            writeln!(stdout, "    {}", field.description.dimmed()).ok();
        }
        writeln!(stdout).ok();
        writeln!(
            stdout,
            "  {} downpayment bounds follow the purchase price: min 15%, max full price",
            "note:".dimmed()
        )
        .ok();

        stdout.flush().ok();
        Ok(())
    }
}

impl Default for InputContractOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<(), DecisionError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| DecisionError::SerializationError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn render_yaml<T: Serialize>(value: &T) -> Result<(), DecisionError> {
    let yaml =
        serde_yaml::to_string(value).map_err(|e| DecisionError::SerializationError(e.to_string()))?;
    println!("{}", yaml);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DecisionEngine;

    fn output_for(inputs: DecisionInputs) -> DecisionOutput {
        let decision = DecisionEngine::new().evaluate(&inputs);
        DecisionOutput::from_decision(&inputs, &decision)
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_maybe_output_mentions_cushion() {
        let output = output_for(DecisionInputs::default());
        assert_eq!(output.verdict, Verdict::Maybe);
        assert!(output.notes.iter().any(|n| n.contains("2.5%")));
        assert_eq!(output.annual_amount, 30_750.0);
    }

    #[test]
    fn test_no_output_includes_future_hint_on_sharp_drop() {
        let output = output_for(DecisionInputs {
            monthly_fee: 25_000.0,
            price_change: -10.0,
            ..Default::default()
        });
        assert_eq!(output.verdict, Verdict::No);
        assert!(output.notes.iter().any(|n| n.contains("rebound")));
    }

    #[test]
    fn test_no_output_without_hint_on_mild_drop() {
        let output = output_for(DecisionInputs {
            monthly_fee: 25_000.0,
            price_change: -1.0,
            ..Default::default()
        });
        assert_eq!(output.verdict, Verdict::No);
        assert!(!output.notes.iter().any(|n| n.contains("rebound")));
    }

    #[test]
    fn test_output_serialization_roundtrip() {
        let output = output_for(DecisionInputs::default());
        let json = serde_json::to_string(&output).unwrap();
        let back: DecisionOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.verdict, Verdict::Maybe);
        assert_eq!(back.monthly_savings, 2_562.5);
    }

    #[test]
    fn test_input_contract_lists_six_fields() {
        let contract = InputContractOutput::new();
        assert_eq!(contract.fields.len(), 6);
        assert_eq!(contract.defaults, DecisionInputs::default());
    }
}
