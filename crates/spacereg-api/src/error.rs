//! # API Error Types
//!
//! [`AppError`] is what handlers return on failure. Every variant renders
//! as the same envelope:
//!
//! ```json
//! {"error": {"code": "INVALID_FIELD", "message": "...", "details": {"field": "inclinationDeg"}}}
//! ```
//!
//! Reference-data failures are logged and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable error code, e.g. `UNKNOWN_JURISDICTION`.
    pub code: String,
    pub message: String,
    /// The offending field, when one can be named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Handler failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// No jurisdiction with this code in the loaded corpus.
    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(String),

    /// No guideline with this id in the loaded corpus.
    #[error("unknown guideline: {0}")]
    UnknownGuideline(String),

    /// The body parsed but a value is out of range.
    #[error("invalid request: {0}")]
    InvalidField(#[from] spacereg_engine::InputError),

    /// A path parameter is not a well-formed code or id.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] spacereg_core::ValidationError),

    /// The body is not JSON of the expected shape.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// The reference data could not be used.
    #[error("reference data error: {0}")]
    ReferenceData(#[from] spacereg_pack::PackError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::UnknownJurisdiction(_) => (StatusCode::NOT_FOUND, "UNKNOWN_JURISDICTION"),
            Self::UnknownGuideline(_) => (StatusCode::NOT_FOUND, "UNKNOWN_GUIDELINE"),
            Self::InvalidField(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_FIELD"),
            Self::InvalidIdentifier(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_IDENTIFIER"),
            Self::MalformedBody(_) => (StatusCode::BAD_REQUEST, "MALFORMED_BODY"),
            Self::ReferenceData(_) => (StatusCode::INTERNAL_SERVER_ERROR, "REFERENCE_DATA_ERROR"),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::InvalidField(e) => Some(serde_json::json!({ "field": e.field })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            Self::ReferenceData(e) => {
                tracing::error!(error = %e, "reference data unavailable");
                "Reference data is unavailable".to_string()
            }
            Self::InvalidField(e) => e.message.clone(),
            other => other.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: self.details(),
            },
        };
        (status, Json(body)).into_response()
    }
}
