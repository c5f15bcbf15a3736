//! # API Error Types
//!
//! Maps [`LookupError`] outcomes to HTTP responses with structured JSON
//! bodies. NotFound and Ambiguous are both not-found-style outcomes but
//! carry distinct machine-readable codes — an ambiguous identifier is a
//! data-consistency condition worth separate alerting, not a typo.
//! Source failures are server-side: the reason is logged but never
//! returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use aip_core::LookupError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "AMBIGUOUS_IDENTIFIER").
    pub code: String,
    /// Short human-readable reason.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Lookup(LookupError::NotFound(_)) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Lookup(LookupError::Ambiguous(_)) => {
                (StatusCode::NOT_FOUND, "AMBIGUOUS_IDENTIFIER")
            }
            Self::Lookup(LookupError::Source { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SOURCE_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose backing-source failure details to clients.
        let message = match &self {
            Self::Lookup(LookupError::Source { .. }) => {
                tracing::error!(error = %self, "backing source failure");
                "a backing source failed".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
