//! Planner error types with HTTP status code mapping.
//!
//! [`PlannerError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "wedding not found: 7c9e...",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges below).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 3000–3999 | Server          | 500 Internal Server Error  |
/// | 4000–4999 | Planning        | 422 Unprocessable Entity   |
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Wedding with the given ID was not found.
    #[error("wedding not found: {0}")]
    WeddingNotFound(uuid::Uuid),

    /// Sub-event with the given ID was not found in the wedding timeline.
    #[error("sub-event not found: {0}")]
    EventNotFound(uuid::Uuid),

    /// Guest with the given ID was not found on the guest list.
    #[error("guest not found: {0}")]
    GuestNotFound(uuid::Uuid),

    /// Seating table with the given ID was not found.
    #[error("table not found: {0}")]
    TableNotFound(uuid::Uuid),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Sub-event timestamps are malformed (e.g. ends before it starts).
    #[error("invalid event data: {0}")]
    InvalidEventData(String),

    /// Auto-assignment was invoked with no seating tables defined.
    #[error("no seating tables available; create at least one table before auto-assigning")]
    NoTablesAvailable,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlannerError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidEventData(_) => 1002,
            Self::WeddingNotFound(_) => 2001,
            Self::EventNotFound(_) => 2002,
            Self::GuestNotFound(_) => 2003,
            Self::TableNotFound(_) => 2004,
            Self::NoTablesAvailable => 4001,
            Self::PersistenceError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidEventData(_) => StatusCode::BAD_REQUEST,
            Self::WeddingNotFound(_)
            | Self::EventNotFound(_)
            | Self::GuestNotFound(_)
            | Self::TableNotFound(_) => StatusCode::NOT_FOUND,
            Self::NoTablesAvailable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::engine::seating::SeatingError> for PlannerError {
    fn from(err: crate::engine::seating::SeatingError) -> Self {
        match err {
            crate::engine::seating::SeatingError::NoTablesAvailable => Self::NoTablesAvailable,
        }
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
