//! Error types for the Receipt API.
//!
//! ## Response Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ApiError                 Status   Body                                 │
//! │  ─────────────────────    ──────   ──────────────────────────────────   │
//! │  Rejected(EmptyBody)      400      {"error": "Empty body"}              │
//! │  Rejected(Validation)     400      {"error": "Invalid total format"}    │
//! │  MalformedBody            400      {"error": "Malformed JSON body: …"}  │
//! │  UnreadableBody           413…     {"error": "Failed to buffer …"}      │
//! │  NotFound                 404      {"error": "No receipt found …"}      │
//! │  Internal                 500      {"error": "Internal error"}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use receipt_core::{CoreError, ReceiptId};
use receipt_store::StoreError;

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Receipt refused by validation.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// Body is not JSON, or not a JSON object or array.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// Body could not be read, e.g. it exceeds the configured limit.
    #[error("{message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("No receipt found for that id")]
    NotFound(ReceiptId),

    /// Detail is logged, never sent to the client.
    #[error("Internal error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnreadableBody { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ApiError::NotFound(id),
            StoreError::Duplicate { .. } => ApiError::Internal(error.to_string()),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!(%detail, "Internal error");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(CoreError::EmptyBody).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::not_found("x")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::duplicate("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UnreadableBody {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: "length limit exceeded".to_string(),
            }
            .status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_messages_are_wire_messages() {
        let err = ApiError::from(CoreError::from(ValidationError::InvalidRetailer));
        assert_eq!(err.to_string(), "Invalid retailer format");

        let err = ApiError::from(StoreError::not_found("abc"));
        assert_eq!(err.to_string(), "No receipt found for that id");

        let err = ApiError::from(StoreError::duplicate("abc"));
        assert_eq!(err.to_string(), "Internal error");
    }
}
