//! Decision records for audit logging
//!
//! Every calculation can be captured as an immutable, append-only record:
//! a unique event id, a hash of the input snapshot for deduplication and
//! tracing, the verdict, and the monetary outcome. Records are structured
//! for log pipelines; nothing is persisted by the agent itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use uuid::Uuid;

use crate::engine::Decision;
use crate::inputs::DecisionInputs;

/// Compute a stable hash of an input snapshot.
///
/// Field order is fixed by serializing the struct itself, so identical
/// snapshots always produce identical hashes.
pub fn hash_inputs(inputs: &DecisionInputs) -> String {
    let mut hasher = Sha256::new();
    // DecisionInputs serialization is infallible (plain numeric struct)
    let canonical = serde_json::to_string(inputs).unwrap_or_default();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// An immutable record of one rent-vs-buy decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Unique identifier for this record
    pub event_id: Uuid,

    /// Agent identifier
    pub agent_id: String,

    /// Agent version (semantic versioning)
    pub agent_version: String,

    /// Hash of the input snapshot for deduplication and tracing
    pub inputs_hash: String,

    /// Verdict as a lowercase tag ("yes" / "maybe" / "no")
    pub verdict: String,

    /// Monthly savings when buying wins (0 otherwise)
    pub monthly_savings: f64,

    /// Monthly loss when renting wins (0 otherwise)
    pub monthly_loss: f64,

    /// Reference to the execution context (request id, CLI invocation)
    pub execution_ref: String,

    /// Timestamp when the decision was made
    pub timestamp: DateTime<Utc>,

    /// Additional metadata for analytics
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl DecisionRecord {
    /// Agent identifier
    pub const AGENT_ID: &'static str = "rentbuy-decision-agent";

    /// Create a record from a computed decision
    pub fn from_decision(
        inputs: &DecisionInputs,
        decision: &Decision,
        execution_ref: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            agent_id: Self::AGENT_ID.to_string(),
            agent_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs_hash: hash_inputs(inputs),
            verdict: decision.verdict.to_string(),
            monthly_savings: decision.monthly_savings,
            monthly_loss: decision.monthly_loss,
            execution_ref: execution_ref.into(),
            timestamp: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "[{}] verdict={} savings={:.2} loss={:.2} inputs={}",
            self.event_id,
            self.verdict,
            self.monthly_savings,
            self.monthly_loss,
            &self.inputs_hash[..12.min(self.inputs_hash.len())]
        )
    }

    /// Emit the record as a structured log line
    pub fn log(&self) {
        tracing::info!(
            event_id = %self.event_id,
            verdict = %self.verdict,
            inputs_hash = %self.inputs_hash,
            execution_ref = %self.execution_ref,
            monthly_savings = self.monthly_savings,
            monthly_loss = self.monthly_loss,
            "decision record"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DecisionEngine;

    #[test]
    fn test_hash_is_stable_and_input_sensitive() {
        let a = DecisionInputs::default();
        let b = DecisionInputs {
            current_rent: 15_001.0,
            ..Default::default()
        };
        assert_eq!(hash_inputs(&a), hash_inputs(&a));
        assert_ne!(hash_inputs(&a), hash_inputs(&b));
        // sha256 hex digest
        assert_eq!(hash_inputs(&a).len(), 64);
    }

    #[test]
    fn test_record_from_decision() {
        let inputs = DecisionInputs::default();
        let decision = DecisionEngine::new().evaluate(&inputs);
        let record = DecisionRecord::from_decision(&inputs, &decision, "exec-test");

        assert_eq!(record.agent_id, DecisionRecord::AGENT_ID);
        assert_eq!(record.verdict, "maybe");
        assert_eq!(record.monthly_savings, 2_562.5);
        assert_eq!(record.monthly_loss, 0.0);
        assert_eq!(record.execution_ref, "exec-test");
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let inputs = DecisionInputs::default();
        let decision = DecisionEngine::new().evaluate(&inputs);
        let record = DecisionRecord::from_decision(&inputs, &decision, "exec-test")
            .with_metadata("source", serde_json::json!("cli"));

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.event_id, back.event_id);
        assert_eq!(record.inputs_hash, back.inputs_hash);
        assert_eq!(back.metadata["source"], serde_json::json!("cli"));
    }

    #[test]
    fn test_summary_contains_verdict() {
        let inputs = DecisionInputs::default();
        let decision = DecisionEngine::new().evaluate(&inputs);
        let record = DecisionRecord::from_decision(&inputs, &decision, "exec");
        assert!(record.summary().contains("verdict=maybe"));
    }
}
