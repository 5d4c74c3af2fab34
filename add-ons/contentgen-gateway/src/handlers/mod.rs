//! HTTP handlers. Each returns `Result<Json<_>, ApiError>`; errors are terminal for the
//! request and reported as JSON.

pub mod catalog;
pub mod content;
pub mod image;
pub mod m3;
pub mod video;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

/// Error with `success: false`, used by the text endpoints.
pub fn failure(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
            success: Some(false),
        }),
    )
}

/// Bare `{ error }` body, used by the media endpoints.
pub fn bare_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
            success: None,
        }),
    )
}

/// Body extractor result. Rejections such as a wrong field type or a missing content type
/// become a JSON `{ error }` instead of axum's plain-text reply.
pub type JsonBody<T> = Result<Json<T>, JsonRejection>;

pub(crate) fn read_body<T>(body: JsonBody<T>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        let status = match &rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => rejection.status(),
        };
        tracing::warn!(
            target: "contentgen::gateway",
            status = status.as_u16(),
            error = %rejection.body_text(),
            "request body rejected"
        );
        bare_error(status, rejection.body_text())
    })
}

pub(crate) fn require_prompt(prompt: &str) -> Result<(), ApiError> {
    if prompt.trim().is_empty() {
        return Err(bare_error(StatusCode::BAD_REQUEST, "Prompt is required"));
    }
    Ok(())
}
