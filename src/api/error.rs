//! Structured API error responses.
//!
//! Response bodies are part of the wire contract:
//! - validation failures return `{"errors": [...]}`;
//! - everything else returns `{"error": ..., "detail": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::infra::PassportError;

/// API-facing error, carrying its HTTP status and response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Report failed the certification rules -> 400.
    Validation { errors: Vec<String> },
    /// A passport already exists for the device -> 409.
    AlreadyMinted { detail: String },
    /// No passport for the device -> 404.
    NotFound { detail: String },
    /// Storage or encoding failure -> 400 with the cause attached.
    Storage { detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::AlreadyMinted { .. } => StatusCode::CONFLICT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            ApiError::Validation { errors } => json!({ "errors": errors }),
            ApiError::AlreadyMinted { detail } => json!({
                "error": "Passport already exists",
                "detail": detail,
            }),
            ApiError::NotFound { detail } => json!({
                "error": "Passport not found",
                "detail": detail,
            }),
            ApiError::Storage { detail } => json!({
                "error": "Failed to store passport record",
                "detail": detail,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<PassportError> for ApiError {
    fn from(err: PassportError) -> Self {
        match err {
            PassportError::Validation { errors } => ApiError::Validation { errors },
            PassportError::AlreadyMinted(device_id) => ApiError::AlreadyMinted {
                detail: format!("A digital passport for device {device_id} has already been minted."),
            },
            PassportError::NotFound(device_id) => ApiError::NotFound {
                detail: format!("No digital passport has been minted for device {device_id}."),
            },
            PassportError::Database(e) => ApiError::Storage { detail: e.to_string() },
            PassportError::Internal(msg) => ApiError::Storage { detail: msg },
        }
    }
}
