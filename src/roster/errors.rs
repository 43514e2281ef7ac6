//! # Roster Errors
//!
//! Error taxonomy for the roster domain and its HTTP mapping.
//!
//! Both client-facing kinds are terminal at the handler boundary: they
//! translate directly into an error response with no retry and no
//! recovery, and the store stays live after any failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Roster domain errors
#[derive(Debug, Clone, Error)]
pub enum RosterError {
    /// Operation referenced an id absent from the store
    #[error("Student not found")]
    NotFound,

    /// Inbound record failed one or more field constraints
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Unexpected internal failure (lock poisoning)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::NotFound => StatusCode::NOT_FOUND,
            RosterError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RosterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single field-constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Offending field name
    pub field: String,
    /// Expected constraint
    pub expected: String,
    /// Actual value or measurement found
    pub actual: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl From<RosterError> for ErrorResponse {
    fn from(err: RosterError) -> Self {
        let code = err.status_code().as_u16();
        let violations = match &err {
            RosterError::Validation(violations) => Some(violations.clone()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            code,
            violations,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
