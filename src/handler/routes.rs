//! Route definitions for the Rent vs Buy Decision Agent
//!
//! Stateless decision endpoint plus health, input-contract, and metrics
//! exposition routes. The decision endpoint is deterministic: identical
//! request bodies yield identical decisions.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{
    ApiError, ApiResponse, ComponentHealth, DecideRequest, DecideResponse, HealthResponse,
    HealthStatus, RecordInfo,
};
use crate::engine::DecisionEngine;
use crate::inputs::{DecisionInputs, FieldSpec};
use crate::telemetry::{DecisionMetricsRegistry, DecisionRecord, TelemetryConfig};

/// Handler state shared across all routes
#[derive(Clone)]
pub struct HandlerState {
    engine: DecisionEngine,
    telemetry: TelemetryConfig,
    metrics: Option<DecisionMetricsRegistry>,
    start_time: Instant,
}

impl HandlerState {
    pub fn new(telemetry: TelemetryConfig) -> Self {
        let metrics = if telemetry.enable_metrics {
            match DecisionMetricsRegistry::new() {
                Ok(registry) => Some(registry),
                Err(err) => {
                    tracing::warn!(error = %err, "metrics registry unavailable");
                    None
                }
            }
        } else {
            None
        };
        Self {
            engine: DecisionEngine::new(),
            telemetry,
            metrics,
            start_time: Instant::now(),
        }
    }

    pub fn metrics(&self) -> Option<&DecisionMetricsRegistry> {
        self.metrics.as_ref()
    }
}

impl Default for HandlerState {
    fn default() -> Self {
        Self::new(TelemetryConfig::default())
    }
}

/// Create the router with all routes
pub fn create_router(state: HandlerState) -> Router {
    Router::new()
        .route("/decide", post(decide))
        .route("/health", get(health_check))
        .route("/defaults", get(defaults))
        .route("/bounds", get(bounds))
        .route("/metrics", get(metrics_exposition))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the router until the process is stopped
pub async fn serve(host: &str, port: u16) -> crate::error::Result<()> {
    let state = HandlerState::default();
    let router = create_router(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(crate::error::DecisionError::from)?;
    tracing::info!(addr = %addr, "decision agent listening");
    axum::serve(listener, router)
        .await
        .map_err(|e| crate::error::DecisionError::InternalError(e.to_string()))
}

/// POST /decide - compute a decision from an input snapshot
///
/// Inputs are clamped, never rejected; the endpoint is deterministic and
/// stateless.
pub async fn decide(
    State(state): State<HandlerState>,
    Json(request): Json<DecideRequest>,
) -> Result<Json<ApiResponse<DecideResponse>>, ApiError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let inputs = request.inputs.clamped();
    let decision = state.engine.evaluate(&inputs);

    let record = if request.options.emit_record && state.telemetry.log_records {
        let record = DecisionRecord::from_decision(&inputs, &decision, request_id.clone());
        record.log();
        if let Some(metrics) = state.metrics() {
            metrics.decision().record_emitted("api");
        }
        Some(RecordInfo {
            event_id: record.event_id,
            inputs_hash: record.inputs_hash,
        })
    } else {
        None
    };

    if let Some(metrics) = state.metrics() {
        metrics.decision().record_decision(&decision, "api");
        metrics
            .decision()
            .observe_duration(start.elapsed().as_secs_f64());
    }

    tracing::debug!(request_id = %request_id, verdict = %decision.verdict, "decision served");

    let response = DecideResponse {
        inputs,
        decision,
        record,
    };
    Ok(Json(ApiResponse::success(response, request_id)))
}

/// GET /health - health check endpoint
pub async fn health_check(State(state): State<HandlerState>) -> Json<HealthResponse> {
    let telemetry = !state.telemetry.enable_metrics || state.metrics.is_some();

    // The engine is pure and always available; only telemetry can degrade
    let status = if telemetry {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        components: ComponentHealth {
            decision_engine: true,
            telemetry,
        },
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /defaults - default input snapshot
pub async fn defaults() -> Json<ApiResponse<DecisionInputs>> {
    let request_id = Uuid::new_v4().to_string();
    Json(ApiResponse::success(DecisionInputs::default(), request_id))
}

/// GET /bounds - per-field input contract
pub async fn bounds() -> Json<ApiResponse<Vec<FieldSpec>>> {
    let request_id = Uuid::new_v4().to_string();
    Json(ApiResponse::success(
        DecisionInputs::field_specs(),
        request_id,
    ))
}

/// GET /metrics - Prometheus exposition
pub async fn metrics_exposition(State(state): State<HandlerState>) -> impl IntoResponse {
    match state.metrics() {
        Some(registry) => match registry.gather() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                body,
            )
                .into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("metrics encoding failed: {}", err),
            )
                .into_response(),
        },
        None => (StatusCode::NOT_FOUND, "metrics disabled".to_string()).into_response(),
    }
}
