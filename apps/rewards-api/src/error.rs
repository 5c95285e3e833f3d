//! # API Error Type
//!
//! Every failure a handler can return, and how it looks on the wire.
//!
//! ```text
//! ┌──────────────────────┬────────┬──────────────────────────────────────────┐
//! │ Variant              │ Status │ Body                                     │
//! ├──────────────────────┼────────┼──────────────────────────────────────────┤
//! │ MalformedReceipt     │ 400    │ {"description": "The receipt is invalid."}│
//! │ InvalidReceipt       │ 400    │ {... , "details": [messages]}            │
//! │ InvalidId            │ 400    │ {"description": "No receipt found for    │
//! │                      │        │   that ID.", "details": [messages]}      │
//! │ NotFound             │ 404    │ {"description": "No receipt found for    │
//! │                      │        │   that ID."}                             │
//! └──────────────────────┴────────┴──────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rewards_core::{ValidationError, Violations};
use serde::Serialize;

pub const INVALID_RECEIPT: &str = "The receipt is invalid.";
pub const RECEIPT_NOT_FOUND: &str = "No receipt found for that ID.";

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body was not a JSON receipt (bad syntax, missing or unknown fields).
    #[error("Malformed receipt: {0}")]
    MalformedReceipt(String),

    /// Receipt decoded but failed validation.
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] Violations),

    /// Lookup id is empty or contains whitespace.
    #[error("Invalid receipt id: {0}")]
    InvalidId(#[from] ValidationError),

    /// No receipt was ever saved under this id.
    #[error("Receipt not found: {0}")]
    NotFound(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedReceipt(rejection.body_text())
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedReceipt(_)
            | ApiError::InvalidReceipt(_)
            | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::MalformedReceipt(_) => ErrorBody {
                description: INVALID_RECEIPT,
                details: Vec::new(),
            },
            ApiError::InvalidReceipt(violations) => ErrorBody {
                description: INVALID_RECEIPT,
                details: violations.messages(),
            },
            ApiError::InvalidId(error) => ErrorBody {
                description: RECEIPT_NOT_FOUND,
                details: vec![error.message()],
            },
            ApiError::NotFound(_) => ErrorBody {
                description: RECEIPT_NOT_FOUND,
                details: Vec::new(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
