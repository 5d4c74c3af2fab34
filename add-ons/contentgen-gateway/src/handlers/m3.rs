//! `POST /api/m3-generate`: locally fabricated "memory-enhanced" content.

use super::{read_body, ApiError, JsonBody};
use axum::Json;
use contentgen_core::prompts::m3::{self, AGENT_NAME};
use contentgen_core::GenerationRequest;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct M3Response {
    pub content: String,
    pub success: bool,
    pub prompt: String,
    pub agent: &'static str,
    pub memory_used: bool,
}

pub async fn m3_generate(body: JsonBody<GenerationRequest>) -> Result<Json<M3Response>, ApiError> {
    let request = read_body(body)?;
    tracing::info!(
        target: "contentgen::gateway",
        category = %request.category,
        mode = ?request.mode(),
        "M3 stub generation"
    );

    Ok(Json(M3Response {
        content: m3::generate(&request),
        success: true,
        prompt: request.echo_prompt("M3-Enhanced"),
        agent: AGENT_NAME,
        memory_used: true,
    }))
}
