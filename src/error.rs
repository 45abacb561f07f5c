//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type returned by every handler. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::ModelError;
use crate::validator::FieldErrors;

const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "request failed validation",
///     "details": { "title": "must be provided" }
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
    /// Numeric error code (see code ranges on [`ApiError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Per-field validation messages, when relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

/// Handler error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Request         | 400 Bad Request / 422        |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server          | 500 Internal Server Error / 408 |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or query string could not be interpreted.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// One or more fields failed validation.
    #[error("request failed validation")]
    FailedValidation(FieldErrors),

    /// The requested resource could not be found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The record changed since the client last read it.
    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    /// Data layer failure other than not-found or conflict.
    #[error("database error: {0}")]
    Model(ModelError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// The request was not handled within the configured time.
    #[error("the server did not finish handling the request in time")]
    RequestTimeout,
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::BadRequest(_) => 1001,
            Self::FailedValidation(_) => 1002,
            Self::NotFound => 2001,
            Self::EditConflict => 2002,
            Self::Model(_) => 3001,
            Self::Internal(_) => 3000,
            Self::RequestTimeout => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::EditConflict => StatusCode::CONFLICT,
            Self::Model(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotFound => Self::NotFound,
            ModelError::EditConflict => Self::EditConflict,
            ModelError::DuplicateEmail => {
                let mut details = FieldErrors::new();
                details.insert(
                    "email".to_string(),
                    "a user with this email address already exists".to_string(),
                );
                Self::FailedValidation(details)
            }
            ModelError::UnsafeSort(sort) => {
                let mut details = FieldErrors::new();
                details.insert("sort".to_string(), format!("invalid sort value: {sort}"));
                Self::FailedValidation(details)
            }
            other => Self::Model(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Server-side failures are logged in full and reported generically.
        let message = match &self {
            Self::Model(err) => {
                tracing::error!(error = %err, "data layer failure");
                SERVER_ERROR_MESSAGE.to_string()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                SERVER_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };
        let details = match self {
            Self::FailedValidation(fields) => Some(fields),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
