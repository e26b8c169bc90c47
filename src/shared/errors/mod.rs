//! Error Types
//!
//! Layered error types and the one place that maps them to HTTP status codes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic message sent instead of store internals
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Status codes used for validation failures and missing rows on writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMapping {
    /// Validation failures and missing rows on update/delete answer 500
    #[default]
    Compatible,
    /// Validation failures answer 400, missing rows on update/delete answer 404
    Uniform,
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update or delete addressed a row that does not exist
    #[error("{0}")]
    NotFound(String),
}

/// Field-level error for validation failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Use case-level errors
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{resource} with id {id} not found.")]
    NotFound { resource: &'static str, id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Error for an update or delete that addressed a missing row
    #[must_use]
    pub fn missing_row(resource: &'static str, id: &str) -> Self {
        Self::Repository(RepositoryError::NotFound(format!(
            "{resource} with id {id} not found."
        )))
    }

    /// Get the HTTP status code for this error under the given mapping
    #[must_use]
    pub fn status_code(&self, mapping: ErrorMapping) -> StatusCode {
        match (self, mapping) {
            (Self::Validation(_), ErrorMapping::Compatible) => StatusCode::INTERNAL_SERVER_ERROR,
            (Self::Validation(_), ErrorMapping::Uniform) => StatusCode::BAD_REQUEST,
            (Self::NotFound { .. }, _) => StatusCode::NOT_FOUND,
            (Self::Repository(RepositoryError::NotFound(_)), ErrorMapping::Uniform) => StatusCode::NOT_FOUND,
            (Self::Repository(_), _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for UseCaseError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    FieldError::new(
                        field.to_string(),
                        e.message.as_ref().map_or("invalid", |m| m.as_ref()),
                    )
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        UseCaseError::Validation(errors)
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{error}")]
    UseCase {
        #[source]
        error: UseCaseError,
        mapping: ErrorMapping,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// Wrap a use case failure with the status mapping in force
    #[must_use]
    pub fn mapped(error: UseCaseError, mapping: ErrorMapping) -> Self {
        Self::UseCase { error, mapping }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::UseCase { error, mapping } => {
                let status = error.status_code(mapping);
                let body = match error {
                    UseCaseError::Validation(errors) => ErrorResponse {
                        errors: Some(errors),
                        ..ErrorResponse::new("Validation failed")
                    },
                    not_found @ UseCaseError::NotFound { .. } => ErrorResponse::new(not_found.to_string()),
                    UseCaseError::Repository(repo_error) => {
                        tracing::error!(error = %repo_error, "Store operation failed");
                        match repo_error {
                            RepositoryError::NotFound(message) if status == StatusCode::NOT_FOUND => {
                                ErrorResponse::new(message)
                            }
                            _ => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
                        }
                    }
                };
                (status, body)
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
        };

        (status, Json(body)).into_response()
    }
}
