//! Typed error handling for the ship registry
//!
//! Every operation of [`ShipQueryService`](crate::core::service::ShipQueryService)
//! returns a [`ShipError`]. Callers classify it with [`ShipError::kind`]; the
//! HTTP exposure maps it to a status code and a JSON body.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get("42").await {
//!     Ok(ship) => println!("{}", ship.name),
//!     Err(ShipError::NotFound { id }) => println!("ship {} is gone", id),
//!     Err(e) if e.kind() == ErrorKind::BadRequest => println!("fix your input: {}", e),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::core::ship::ShipId;
use crate::core::validation::ValidationError;

/// Coarse classification of a [`ShipError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-fixable input problem; never retried
    BadRequest,
    /// The addressed ship does not exist
    NotFound,
    /// The store failed underneath the service
    Internal,
}

/// The error type returned by every ship operation
#[derive(Debug, Error)]
pub enum ShipError {
    /// The identifier was empty, non-numeric, negative or zero
    #[error("invalid ship id '{raw}': {reason}")]
    InvalidId { raw: String, reason: &'static str },

    /// A field of the payload broke one of its constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Filter, sort or paging parameters could not be used
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The request body could not be decoded
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// No ship is stored under this id
    #[error("ship with id '{id}' not found")]
    NotFound { id: ShipId },

    /// Storage backend failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ShipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShipError::InvalidId { .. }
            | ShipError::Validation(_)
            | ShipError::InvalidQuery(_)
            | ShipError::InvalidPayload(_) => ErrorKind::BadRequest,
            ShipError::NotFound { .. } => ErrorKind::NotFound,
            ShipError::Storage(_) => ErrorKind::Internal,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ShipError::InvalidId { .. } => "INVALID_SHIP_ID",
            ShipError::Validation(ValidationError::MissingField { .. }) => "MISSING_FIELD",
            ShipError::Validation(ValidationError::OutOfRange { .. }) => "VALIDATION_ERROR",
            ShipError::InvalidQuery(_) => "INVALID_QUERY",
            ShipError::InvalidPayload(_) => "INVALID_PAYLOAD",
            ShipError::NotFound { .. } => "SHIP_NOT_FOUND",
            ShipError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ShipError::InvalidId { raw, .. } => Some(serde_json::json!({ "id": raw })),
            ShipError::Validation(e) => Some(serde_json::json!({ "field": e.field() })),
            ShipError::NotFound { id } => Some(serde_json::json!({ "id": id.get() })),
            _ => None,
        }
    }
}

impl IntoResponse for ShipError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "ship operation failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}
