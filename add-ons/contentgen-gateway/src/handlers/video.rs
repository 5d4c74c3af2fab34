//! `POST /api/generate-video`: simulated; returns the configured placeholder.

use super::{bare_error, read_body, require_prompt, ApiError, JsonBody};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contentgen_core::{simulate_video, VideoRequest, VideoResult, MISSING_RUNWAY_KEY};

pub async fn generate_video(
    State(state): State<AppState>,
    body: JsonBody<VideoRequest>,
) -> Result<Json<VideoResult>, ApiError> {
    let request = read_body(body)?;
    require_prompt(&request.prompt)?;
    if state.credentials.runway_api_key.is_none() {
        return Err(bare_error(StatusCode::BAD_REQUEST, MISSING_RUNWAY_KEY));
    }

    tracing::info!(
        target: "contentgen::gateway",
        duration = request.duration,
        style = %request.style,
        "simulating video"
    );

    Ok(Json(simulate_video(
        &request,
        &state.config.video_placeholder_url,
    )))
}
