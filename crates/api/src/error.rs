//! API error types with HTTP response mapping.
//!
//! Validation failures render as a field → messages map. Every other
//! failure renders as a problem document:
//!
//! ```json
//! { "status": 409, "title": "...", "instance": "POST /api/v1/products",
//!   "errorCodes": ["Product.DuplicateName"] }
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use domain::{Error, ErrorKind};
use serde::Serialize;

/// Content type for problem documents.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Title used for every unexpected fault.
pub const INTERNAL_ERROR_TITLE: &str =
    "An unexpected error occurred while processing your request.";

/// Code reported when the request body cannot be read as a command.
pub const INVALID_BODY_CODE: &str = "Request.InvalidBody";

/// Problem body for non-validation failures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_codes: Vec<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: title.into(),
            detail: None,
            instance: None,
            error_codes: Vec::new(),
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_error_codes(mut self, codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.error_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Generic 500 problem. The fault text only appears in debug builds.
    pub fn internal(instance: impl Into<String>, fault: impl Display) -> Self {
        let problem = Problem::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_TITLE)
            .with_instance(instance);
        if cfg!(debug_assertions) {
            problem.with_detail(fault.to_string())
        } else {
            problem
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        response
    }
}

/// HTTP status for a business error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Failure | ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders the errors of a failed outcome.
pub fn errors_to_response(errors: &[Error], instance: &str) -> Response {
    let Some(first) = errors.first() else {
        return Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred.",
        )
        .into_response();
    };

    if errors.iter().all(|e| e.kind() == ErrorKind::Validation) {
        let mut fields: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for error in errors {
            fields
                .entry(error.code())
                .or_default()
                .push(error.description());
        }
        return (StatusCode::BAD_REQUEST, Json(fields)).into_response();
    }

    Problem::new(status_for(first.kind()), first.description())
        .with_instance(instance)
        .with_error_codes(errors.iter().map(|e| e.code()))
        .into_response()
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be turned into a command.
    BadRequest { instance: String, message: String },
    /// The pipeline rejected the command.
    Rejected { instance: String, errors: Vec<Error> },
    /// Internal server error.
    Internal { instance: String, message: String },
}

impl ApiError {
    pub fn bad_request(instance: &str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            instance: instance.to_string(),
            message: message.into(),
        }
    }

    pub fn internal(instance: &str, fault: impl Display) -> Self {
        ApiError::Internal {
            instance: instance.to_string(),
            message: fault.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest { instance, message } => {
                Problem::new(StatusCode::BAD_REQUEST, message)
                    .with_instance(instance)
                    .with_error_codes([INVALID_BODY_CODE])
                    .into_response()
            }
            ApiError::Rejected { instance, errors } => errors_to_response(&errors, &instance),
            ApiError::Internal { instance, message } => {
                tracing::error!(%instance, error = %message, "internal server error");
                Problem::internal(instance, message).into_response()
            }
        }
    }
}
