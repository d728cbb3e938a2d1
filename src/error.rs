//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for request handling. Every
//! variant maps to an HTTP status and is rendered as a plain-text body
//! carrying the verbatim error message.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Request-level failure.
///
/// | Variant          | HTTP Status               |
/// |------------------|---------------------------|
/// | `InvalidRequest` | 400 Bad Request           |
/// | `NotFound`       | 404 Not Found             |
/// | `Storage`        | 500 Internal Server Error |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// A required query parameter is missing or malformed.
    #[error("{0}")]
    InvalidRequest(String),

    /// The query matched no stored readings.
    #[error("{0}")]
    NotFound(String),

    /// The backing store failed. Carries the driver's error text.
    #[error("{0}")]
    Storage(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Storage(msg) => tracing::error!(error = %msg, "storage failure"),
            Self::InvalidRequest(msg) | Self::NotFound(msg) => {
                tracing::debug!(%status, error = %msg, "request rejected");
            }
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
