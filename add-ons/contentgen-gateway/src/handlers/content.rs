//! `POST /api/generate-content`: assembled prompts forwarded to the hosted text model.

use super::{failure, read_body, ApiError, JsonBody};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentgen_core::{assemble, GenerationError, GenerationRequest, MISSING_TEXT_PROVIDER};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub content: String,
    pub success: bool,
    pub prompt: String,
}

pub async fn generate_content(
    State(state): State<AppState>,
    body: JsonBody<GenerationRequest>,
) -> Result<Json<ContentResponse>, ApiError> {
    let request = read_body(body)?;
    if !state.credentials.has_text_credential() {
        tracing::warn!(
            target: "contentgen::gateway",
            category = %request.category,
            "generate-content rejected: no text provider credential"
        );
        return Err(failure(StatusCode::BAD_REQUEST, MISSING_TEXT_PROVIDER));
    }

    let prompts = assemble(&request).map_err(|e| content_error(&e))?;

    tracing::info!(
        target: "contentgen::gateway",
        category = %request.category,
        mode = ?request.mode(),
        "generating content"
    );

    let content = state.text.generate(&prompts).await.map_err(|e| {
        tracing::error!(target: "contentgen::gateway", error = %e, "Content generation error");
        content_error(&e)
    })?;

    Ok(Json(ContentResponse {
        content,
        success: true,
        prompt: request.echo_prompt("Smart-generated"),
    }))
}

fn content_error(err: &GenerationError) -> ApiError {
    if err.is_client_side() {
        failure(StatusCode::BAD_REQUEST, err.to_string())
    } else {
        failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate content")
    }
}
