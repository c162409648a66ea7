//! Calculator session state machine
//!
//! Two states only: `Input` (editing the snapshot) and `Result` (showing a
//! computed decision). Calculate moves to `Result`, reset moves back while
//! keeping the last inputs, clear restores the defaults. All state is
//! ephemeral and owned by the session.

use serde::{Deserialize, Serialize};

use crate::engine::{Decision, DecisionEngine};
use crate::inputs::DecisionInputs;

/// Which view the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Input,
    Result,
}

/// An in-memory rent-vs-buy calculator session
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    engine: DecisionEngine,
    inputs: DecisionInputs,
    decision: Option<Decision>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Create a session with default inputs, in the `Input` state
    pub fn new() -> Self {
        Self {
            engine: DecisionEngine::new(),
            inputs: DecisionInputs::default(),
            decision: None,
        }
    }

    /// Create a session seeded with a specific snapshot (clamped)
    pub fn with_inputs(inputs: DecisionInputs) -> Self {
        Self {
            engine: DecisionEngine::new(),
            inputs: inputs.clamped(),
            decision: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.decision.is_some() {
            SessionState::Result
        } else {
            SessionState::Input
        }
    }

    /// Current input snapshot
    pub fn inputs(&self) -> &DecisionInputs {
        &self.inputs
    }

    /// The decision shown in the `Result` state, if any
    pub fn decision(&self) -> Option<&Decision> {
        self.decision.as_ref()
    }

    /// Replace the whole snapshot (clamped); discards any shown result
    pub fn set_inputs(&mut self, inputs: DecisionInputs) {
        self.inputs = inputs.clamped();
        self.decision = None;
    }

    /// Update the purchase price, re-clamping the downpayment
    pub fn set_purchase_price(&mut self, price: f64) {
        self.inputs.set_purchase_price(price);
        self.decision = None;
    }

    /// Compute a decision from the current snapshot: `Input` -> `Result`
    pub fn calculate(&mut self) -> &Decision {
        let decision = self.engine.evaluate(&self.inputs);
        tracing::debug!(verdict = %decision.verdict, "session calculated");
        self.decision.insert(decision)
    }

    /// Discard the result, keep the inputs: `Result` -> `Input`
    pub fn reset(&mut self) {
        self.decision = None;
    }

    /// Discard the result and restore default inputs
    pub fn clear(&mut self) {
        self.inputs = DecisionInputs::default();
        self.decision = None;
    }
}
