//! Category catalogue and the template-backed (simulated) generators.

use super::{read_body, ApiError, JsonBody};
use axum::Json;
use chrono::Utc;
use contentgen_core::{
    category_document, product_document, title_for, Category, GenerationRequest, IconKind,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: IconKind,
}

/// `GET /api/categories`
pub async fn list_categories() -> Json<Vec<CategoryEntry>> {
    Json(
        Category::ALL
            .into_iter()
            .map(|c| CategoryEntry {
                key: c.key(),
                title: c.title(),
                icon: c.icon(),
            })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
pub struct SimulatedContent {
    pub title: &'static str,
    pub content: String,
    pub success: bool,
    pub prompt: String,
    pub simulated: bool,
}

/// `POST /api/simulate-content`: category template lookup, no provider involved.
pub async fn simulate_content(
    body: JsonBody<GenerationRequest>,
) -> Result<Json<SimulatedContent>, ApiError> {
    let request = read_body(body)?;
    let content = category_document(
        &request.category,
        request.prompt_text(),
        request.context_text(),
    );
    Ok(Json(SimulatedContent {
        title: title_for(&request.category),
        content,
        success: true,
        prompt: request.echo_prompt("Simulated"),
        simulated: true,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRequest {
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResponse {
    pub content: String,
    pub success: bool,
    pub file_name: String,
}

/// `POST /api/generate-sample`: product document for download.
pub async fn generate_sample(body: JsonBody<SampleRequest>) -> Result<Json<SampleResponse>, ApiError> {
    let request = read_body(body)?;
    let product_type = request.product_type.as_deref().unwrap_or_default().trim();
    let content = product_document(
        product_type,
        request.prompt.as_deref().unwrap_or_default(),
        request.target_audience.as_deref().unwrap_or_default(),
    );
    let stem = if product_type.is_empty() {
        "content"
    } else {
        product_type
    };
    Ok(Json(SampleResponse {
        content,
        success: true,
        file_name: format!("{}-{}.txt", stem, Utc::now().timestamp_millis()),
    }))
}
