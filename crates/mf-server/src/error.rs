//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mf_core::FormatError;
use serde::Serialize;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: &'a str,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", msg)
    }

    /// Well-formed JSON whose schedule content cannot be rendered.
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable", msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope {
            error: ErrorDetail { code: self.code, message: &self.message },
        };
        (self.status, Json(envelope)).into_response()
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        match &err {
            FormatError::MalformedDaySlot { .. }
            | FormatError::ShapeMismatch { .. }
            | FormatError::UnknownDayIndex(_)
            | FormatError::MalformedSequence(_) => ApiError::unprocessable(err.to_string()),
            FormatError::Serialization(_) => ApiError::bad_request(err.to_string()),
            FormatError::InvalidConfig(_) => ApiError::internal(err.to_string()),
        }
    }
}
