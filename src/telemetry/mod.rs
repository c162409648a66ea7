//! Telemetry for the Rent vs Buy Decision Agent
//!
//! - `metrics` - Prometheus metrics for decision operations
//! - `record` - Immutable decision records for audit logging

pub mod metrics;
pub mod record;

pub use metrics::{DecisionMetrics, DecisionMetricsRegistry};
pub use record::{hash_inputs, DecisionRecord};

use thiserror::Error;

/// Telemetry errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Metrics error: {0}")]
    MetricsError(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable Prometheus metrics
    pub enable_metrics: bool,
    /// Log a structured decision record for every calculation
    pub log_records: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable_metrics: true,
            log_records: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert!(config.enable_metrics);
        assert!(config.log_records);
    }
}
