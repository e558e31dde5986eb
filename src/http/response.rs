//! Response rendering and error mapping.
//!
//! # Responsibilities
//! - Render handler output as indented JSON
//! - Map catalog errors to HTTP status codes with a `{"message": ...}` body
//!
//! # Design Decisions
//! - 4-space indentation on every JSON body the handlers produce
//! - Error bodies share one shape so clients only parse `message`

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// JSON response body rendered with indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_indented_json(&self.0) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                bytes,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to serialize response").into_response()
            }
        }
    }
}

fn to_indented_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors a catalog handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("album not found")]
    AlbumNotFound,
    #[error("invalid album payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AlbumNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), PrettyJson(body)).into_response()
    }
}
