//! Decision engine for the rent-vs-buy calculation
//!
//! The engine is a pure function from an input snapshot to a verdict with
//! supporting figures. It is deterministic, synchronous, and has no failure
//! modes: inputs are pre-clamped by the input layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inputs::DecisionInputs;

/// Cushion for the Maybe verdict: buying must beat renting by at least
/// 2.5% of the financed amount per year. Unmodeled maintenance typically
/// runs 1-4% annually. Preserved as a literal, no derived formula.
pub const MAYBE_CUSHION_RATIO: f64 = 0.025;

/// Price drop (percent) beyond which the "consider future appreciation"
/// hint is raised in the No branch. Preserved as a literal.
pub const FUTURE_HINT_THRESHOLD: f64 = -3.0;

/// The three-way verdict of a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Buying is clearly cheaper than renting
    Yes,
    /// Buying wins, but the annual edge is thin relative to maintenance risk
    Maybe,
    /// Renting is cheaper
    No,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "yes"),
            Verdict::Maybe => write!(f, "maybe"),
            Verdict::No => write!(f, "no"),
        }
    }
}

/// Result of a rent-vs-buy decision
///
/// Recomputed fresh on every calculate from the current input snapshot.
/// `monthly_savings` and `monthly_loss` are mutually exclusive: exactly one
/// is nonzero (or both zero at break-even).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Final verdict; Maybe takes priority over Yes
    pub verdict: Verdict,
    /// Whether buying beats renting on adjusted monthly cost
    pub should_buy: bool,
    /// Whether the win is under the maintenance cushion
    pub is_maybe: bool,
    /// Monthly amount saved by buying (0 when not buying)
    pub monthly_savings: f64,
    /// Monthly extra cost of buying (0 when buying)
    pub monthly_loss: f64,
    /// Echo of the expected price change, percent
    pub price_change: f64,
    /// Hint that prices fell sharply and may rebound (No branch only)
    pub consider_future_appreciation: bool,
    /// Supporting figures behind the verdict
    pub breakdown: Breakdown,
}

/// Intermediate figures of the decision arithmetic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Downpayment after the 15%/full-price clamp
    pub effective_downpayment: f64,
    /// Financed amount: purchase price minus effective downpayment
    pub principal: f64,
    /// Monthly interest on the principal
    pub monthly_interest: f64,
    /// Fee plus interest
    pub total_monthly_cost: f64,
    /// Monthly appreciation offset (0 for non-positive price change)
    pub monthly_appreciation: f64,
    /// Total monthly cost minus the appreciation offset
    pub adjusted_monthly_cost: f64,
    /// Yearly benefit of buying (0 when not buying)
    pub annual_benefit: f64,
    /// Maybe cushion: 2.5% of the principal
    pub maybe_threshold: f64,
}

impl Decision {
    /// Annual savings when buying (monthly savings times 12)
    pub fn annual_savings(&self) -> f64 {
        self.monthly_savings * 12.0
    }

    /// Annual loss when not buying (monthly loss times 12)
    pub fn annual_loss(&self) -> f64 {
        self.monthly_loss * 12.0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "verdict={} savings={:.2}/mo loss={:.2}/mo adjusted_cost={:.2}",
            self.verdict,
            self.monthly_savings,
            self.monthly_loss,
            self.breakdown.adjusted_monthly_cost
        )
    }
}

/// The core decision engine
///
/// Stateless; [`DecisionEngine::evaluate`] is a pure function and may be
/// called any number of times with identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the six inputs into a decision.
    ///
    /// Inputs are clamped here as a final defensive pass; callers that
    /// already normalized via [`DecisionInputs::clamped`] see no change.
    pub fn evaluate(&self, inputs: &DecisionInputs) -> Decision {
        let inputs = inputs.clamped();

        let effective_downpayment = inputs.effective_downpayment();
        let principal = inputs.purchase_price - effective_downpayment;

        let monthly_interest = principal * (inputs.interest_rate / 100.0) / 12.0;
        let total_monthly_cost = inputs.monthly_fee + monthly_interest;

        // Asymmetric on purpose: an expected price drop does not make the
        // monthly cost of ownership look cheaper, only a rise offsets it.
        let monthly_appreciation = if inputs.price_change > 0.0 {
            (inputs.price_change / 100.0) * principal / 12.0
        } else {
            0.0
        };

        let adjusted_monthly_cost = total_monthly_cost - monthly_appreciation;

        let should_buy = inputs.current_rent > adjusted_monthly_cost;
        let difference = (inputs.current_rent - adjusted_monthly_cost).abs();

        let annual_benefit = if should_buy { difference * 12.0 } else { 0.0 };
        let maybe_threshold = principal * MAYBE_CUSHION_RATIO;
        let is_maybe = should_buy && annual_benefit < maybe_threshold;

        let verdict = if is_maybe {
            Verdict::Maybe
        } else if should_buy {
            Verdict::Yes
        } else {
            Verdict::No
        };

        Decision {
            verdict,
            should_buy,
            is_maybe,
            monthly_savings: if should_buy { difference } else { 0.0 },
            monthly_loss: if should_buy { 0.0 } else { difference },
            price_change: inputs.price_change,
            consider_future_appreciation: inputs.price_change < FUTURE_HINT_THRESHOLD,
            breakdown: Breakdown {
                effective_downpayment,
                principal,
                monthly_interest,
                total_monthly_cost,
                monthly_appreciation,
                adjusted_monthly_cost,
                annual_benefit,
                maybe_threshold,
            },
        }
    }
}
