//! HTTP handler for the Rent vs Buy Decision Agent
//!
//! This module defines the API envelope and request/response types:
//! - POST /decide - compute a decision from an input snapshot
//! - GET /health - health check endpoint
//! - GET /defaults - default input snapshot
//! - GET /bounds - per-field input contract (bounds, step, default)
//! - GET /metrics - Prometheus exposition
//!
//! All routes return machine-readable JSON responses except /metrics.

pub mod routes;

pub use routes::{create_router, serve, HandlerState};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Decision;
use crate::inputs::DecisionInputs;

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    pub metadata: ResponseMetadata,
}

impl<T> ApiResponse<T> {
    /// Successful response with data
    pub fn success(data: T, request_id: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: ResponseMetadata::new(request_id),
        }
    }

    /// Error response
    pub fn error(error: ErrorInfo, request_id: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            metadata: ResponseMetadata::new(request_id),
        }
    }
}

/// Metadata attached to every response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub request_id: String,
    pub timestamp: String,
    pub version: String,
}

impl ResponseMetadata {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Structured error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalError(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_info = match &self {
            ApiError::BadRequest(msg) => ErrorInfo::new(self.error_code(), msg),
            ApiError::InternalError(msg) => ErrorInfo::new(self.error_code(), msg),
        };
        let response = ApiResponse::<()>::error(error_info, Uuid::new_v4().to_string());
        (status, Json(response)).into_response()
    }
}

/// Request body for POST /decide
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecideRequest {
    /// Input snapshot; omitted fields fall back to defaults, out-of-range
    /// values are silently clamped
    #[serde(default)]
    pub inputs: DecisionInputs,
    #[serde(default)]
    pub options: DecideOptions,
}

/// Options for POST /decide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideOptions {
    /// Emit a decision record (structured audit log line)
    #[serde(default = "default_true")]
    pub emit_record: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DecideOptions {
    fn default() -> Self {
        Self { emit_record: true }
    }
}

/// Response body for POST /decide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideResponse {
    /// The clamped snapshot the engine actually evaluated
    pub inputs: DecisionInputs,
    pub decision: Decision,
    /// Audit record reference, present when a record was emitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordInfo>,
}

/// Reference to an emitted decision record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInfo {
    pub event_id: Uuid,
    pub inputs_hash: String,
}

/// Health status levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Component health breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub decision_engine: bool,
    pub telemetry: bool,
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub components: ComponentHealth,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub version: String,
}
