//! `POST /api/generate-image`: Stability AI text-to-image, returned as a PNG data URL.

use super::{bare_error, read_body, require_prompt, ApiError, JsonBody};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentgen_core::{GenerationError, ImageRequest, BILLING_MESSAGE, MISSING_STABILITY_KEY};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub success: bool,
    pub image_url: String,
    pub prompt: String,
    pub size: String,
    pub style: String,
    pub seed: Option<u64>,
}

pub async fn generate_image(
    State(state): State<AppState>,
    body: JsonBody<ImageRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let request = read_body(body)?;
    require_prompt(&request.prompt)?;
    if state.credentials.stability_api_key.is_none() {
        return Err(bare_error(StatusCode::BAD_REQUEST, MISSING_STABILITY_KEY));
    }

    tracing::info!(
        target: "contentgen::gateway",
        size = %request.size,
        style = %request.style,
        "generating image"
    );

    let artifact = state.image.text_to_image(&request).await.map_err(|e| {
        tracing::error!(target: "contentgen::gateway", error = %e, "Image generation error");
        image_error(&e)
    })?;

    Ok(Json(ImageResponse {
        success: true,
        image_url: artifact.data_url(),
        prompt: request.prompt,
        size: request.size,
        style: request.style,
        seed: artifact.seed,
    }))
}

fn image_error(err: &GenerationError) -> ApiError {
    match err {
        GenerationError::Config(msg) | GenerationError::InvalidRequest(msg) => {
            bare_error(StatusCode::BAD_REQUEST, msg.clone())
        }
        GenerationError::Billing => bare_error(StatusCode::PAYMENT_REQUIRED, BILLING_MESSAGE),
        GenerationError::ProviderStatus { status, message } => bare_error(
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            format!("Stability AI API error: {}", message),
        ),
        GenerationError::EmptyResult => {
            bare_error(StatusCode::INTERNAL_SERVER_ERROR, "No image generated")
        }
        GenerationError::Transport(_) | GenerationError::Decode(_) => {
            bare_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate image")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_statuses() {
        assert_eq!(image_error(&GenerationError::Billing).0, StatusCode::PAYMENT_REQUIRED);
        let (status, body) = image_error(&GenerationError::ProviderStatus {
            status: 429,
            message: "slow down".to_string(),
        });
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body.error, "Stability AI API error: slow down");
        assert_eq!(
            image_error(&GenerationError::EmptyResult).1.error,
            "No image generated"
        );
    }
}
