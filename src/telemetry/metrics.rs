//! Prometheus metrics for the Rent vs Buy Decision Agent
//!
//! - `decision_requests_total` (counter) - decision requests by verdict and source
//! - `decision_duration_seconds` (histogram) - decision duration distribution
//! - `decision_monthly_delta` (gauge) - last monthly savings/loss by verdict
//! - `decision_errors_total` (counter) - request errors by type
//! - `decision_records_emitted_total` (counter) - audit records emitted

use prometheus::{CounterVec, Encoder, GaugeVec, Histogram, HistogramOpts, Opts, Registry, TextEncoder};
use std::sync::Arc;

use super::Result;
use crate::engine::Decision;

/// Decision metrics for Prometheus
pub struct DecisionMetrics {
    /// Total number of decision requests (by verdict, source)
    requests_total: CounterVec,

    /// Decision duration in seconds
    duration_seconds: Histogram,

    /// Last observed monthly delta (savings positive, loss negative) by verdict
    monthly_delta: GaugeVec,

    /// Request errors (by error_type)
    errors_total: CounterVec,

    /// Decision records emitted
    records_emitted_total: CounterVec,
}

impl DecisionMetrics {
    /// Create metrics and register them with the provided registry
    pub fn new(registry: &Registry) -> Result<Self> {
        let requests_total = CounterVec::new(
            Opts::new(
                "decision_requests_total",
                "Total number of rent-vs-buy decision requests",
            )
            .namespace("rentbuy"),
            &["verdict", "source"],
        )?;

        let duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "decision_duration_seconds",
                "Rent-vs-buy decision duration in seconds",
            )
            .namespace("rentbuy")
            .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1]),
        )?;

        let monthly_delta = GaugeVec::new(
            Opts::new(
                "decision_monthly_delta",
                "Last monthly delta: savings when positive, loss when negative",
            )
            .namespace("rentbuy"),
            &["verdict"],
        )?;

        let errors_total = CounterVec::new(
            Opts::new("decision_errors_total", "Total number of request errors")
                .namespace("rentbuy"),
            &["error_type"],
        )?;

        let records_emitted_total = CounterVec::new(
            Opts::new(
                "decision_records_emitted_total",
                "Total number of decision records emitted",
            )
            .namespace("rentbuy"),
            &["source"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(duration_seconds.clone()))?;
        registry.register(Box::new(monthly_delta.clone()))?;
        registry.register(Box::new(errors_total.clone()))?;
        registry.register(Box::new(records_emitted_total.clone()))?;

        Ok(Self {
            requests_total,
            duration_seconds,
            monthly_delta,
            errors_total,
            records_emitted_total,
        })
    }

    /// Record a completed decision
    pub fn record_decision(&self, decision: &Decision, source: &str) {
        let verdict = decision.verdict.to_string();
        self.requests_total
            .with_label_values(&[&verdict, source])
            .inc();
        let delta = if decision.should_buy {
            decision.monthly_savings
        } else {
            -decision.monthly_loss
        };
        self.monthly_delta.with_label_values(&[&verdict]).set(delta);
    }

    /// Observe the duration of a decision request
    pub fn observe_duration(&self, seconds: f64) {
        self.duration_seconds.observe(seconds);
    }

    /// Record a request error
    pub fn record_error(&self, error_type: &str) {
        self.errors_total.with_label_values(&[error_type]).inc();
    }

    /// Record an emitted decision record
    pub fn record_emitted(&self, source: &str) {
        self.records_emitted_total.with_label_values(&[source]).inc();
    }
}

/// Registry wrapper bundling the Prometheus registry with the agent metrics
#[derive(Clone)]
pub struct DecisionMetricsRegistry {
    registry: Arc<Registry>,
    metrics: Arc<DecisionMetrics>,
}

impl DecisionMetricsRegistry {
    /// Create a new registry with all decision metrics registered
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let metrics = DecisionMetrics::new(&registry)?;
        Ok(Self {
            registry: Arc::new(registry),
            metrics: Arc::new(metrics),
        })
    }

    /// Access the decision metrics
    pub fn decision(&self) -> &DecisionMetrics {
        &self.metrics
    }

    /// Render all metrics in Prometheus text exposition format
    pub fn gather(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&families, &mut buffer)
            .map_err(super::TelemetryError::MetricsError)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DecisionEngine;
    use crate::inputs::DecisionInputs;

    #[test]
    fn test_registry_creation() {
        let registry = DecisionMetricsRegistry::new().unwrap();
        let output = registry.gather().unwrap();
        assert!(output.is_empty() || output.contains("rentbuy"));
    }

    #[test]
    fn test_record_decision_shows_up_in_exposition() {
        let registry = DecisionMetricsRegistry::new().unwrap();
        let decision = DecisionEngine::new().evaluate(&DecisionInputs::default());

        registry.decision().record_decision(&decision, "cli");
        registry.decision().observe_duration(0.0002);
        registry.decision().record_emitted("cli");

        let output = registry.gather().unwrap();
        assert!(output.contains("rentbuy_decision_requests_total"));
        assert!(output.contains("verdict=\"maybe\""));
        assert!(output.contains("rentbuy_decision_duration_seconds"));
    }

    #[test]
    fn test_monthly_delta_sign() {
        let registry = DecisionMetricsRegistry::new().unwrap();
        let loss = DecisionEngine::new().evaluate(&DecisionInputs {
            monthly_fee: 20_000.0,
            ..Default::default()
        });
        registry.decision().record_decision(&loss, "api");
        let output = registry.gather().unwrap();
        assert!(output.contains("rentbuy_decision_monthly_delta"));
        assert!(output.contains("verdict=\"no\""));
    }

    #[test]
    fn test_record_error() {
        let registry = DecisionMetricsRegistry::new().unwrap();
        registry.decision().record_error("bad_request");
        let output = registry.gather().unwrap();
        assert!(output.contains("rentbuy_decision_errors_total"));
    }
}
