//! Stability AI text-to-image.

use super::ImageProvider;
use crate::error::{GenerationError, Result, MISSING_STABILITY_KEY};
use crate::wire::null_as_default;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

fn default_size() -> String {
    "1024x1024".to_string()
}

fn default_style() -> String {
    "vivid".to_string()
}

fn size_or_default<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_else(default_size))
}

fn style_or_default<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_else(default_style))
}

/// Body of `generate-image`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(default = "default_size", deserialize_with = "size_or_default")]
    pub size: String,
    #[serde(default = "default_style", deserialize_with = "style_or_default")]
    pub style: String,
}

impl ImageRequest {
    pub fn is_vivid(&self) -> bool {
        self.style == "vivid"
    }

    /// Prompt with the style suffix the provider expects.
    pub fn styled_prompt(&self) -> String {
        let suffix = if self.is_vivid() {
            ", vibrant colors, high contrast, dramatic lighting"
        } else {
            ", natural colors, soft lighting, realistic"
        };
        format!("{}{}", self.prompt, suffix)
    }

    pub fn style_preset(&self) -> &'static str {
        if self.is_vivid() {
            "enhance"
        } else {
            "natural"
        }
    }
}

/// Pixel dimensions for a requested size label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const DEFAULT: ImageSize = ImageSize {
        width: 1024,
        height: 1024,
    };

    /// Unrecognised labels map to 1024x1024.
    pub fn from_label(label: &str) -> Self {
        let (width, height) = match label.trim() {
            "1024x1024" => (1024, 1024),
            "1792x1024" => (1792, 1024),
            "1024x1792" => (1024, 1792),
            "512x512" => (512, 512),
            "768x768" => (768, 768),
            _ => return Self::DEFAULT,
        };
        Self { width, height }
    }
}

/// First artifact of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    pub base64: String,
    pub seed: Option<u64>,
}

impl ImageArtifact {
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }
}

#[derive(Serialize)]
struct TextPrompt {
    text: String,
    weight: u32,
}

#[derive(Serialize)]
struct StabilityRequest {
    text_prompts: Vec<TextPrompt>,
    cfg_scale: u32,
    height: u32,
    width: u32,
    samples: u32,
    steps: u32,
    style_preset: &'static str,
}

#[derive(Debug, Deserialize)]
struct StabilityResponse {
    #[serde(default)]
    artifacts: Vec<StabilityArtifact>,
}

#[derive(Debug, Deserialize)]
struct StabilityArtifact {
    base64: String,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct StabilityErrorBody {
    message: Option<String>,
}

pub struct StabilityClient {
    url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl StabilityClient {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageProvider for StabilityClient {
    async fn text_to_image(&self, request: &ImageRequest) -> Result<ImageArtifact> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::Config(MISSING_STABILITY_KEY.to_string()))?;

        let size = ImageSize::from_label(&request.size);
        let body = StabilityRequest {
            text_prompts: vec![TextPrompt {
                text: request.styled_prompt(),
                weight: 1,
            }],
            cfg_scale: 7,
            height: size.height,
            width: size.width,
            samples: 1,
            steps: 30,
            style_preset: request.style_preset(),
        };

        let res = self
            .client
            .post(&self.url)
            .header("Accept", "application/json")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            tracing::error!(
                target: "contentgen::provider",
                status = status.as_u16(),
                body = %text,
                "Stability AI API error"
            );
            if status.as_u16() == 402 {
                return Err(GenerationError::Billing);
            }
            let message = serde_json::from_str::<StabilityErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(GenerationError::ProviderStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: StabilityResponse = res.json().await?;
        parsed
            .artifacts
            .into_iter()
            .next()
            .map(|a| ImageArtifact {
                base64: a.base64,
                seed: a.seed,
            })
            .ok_or(GenerationError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(style: &str) -> ImageRequest {
        ImageRequest {
            prompt: "a lighthouse".to_string(),
            size: default_size(),
            style: style.to_string(),
        }
    }

    #[test]
    fn known_sizes_map_to_dimensions() {
        assert_eq!(ImageSize::from_label("512x512"), ImageSize { width: 512, height: 512 });
        assert_eq!(ImageSize::from_label("1792x1024"), ImageSize { width: 1792, height: 1024 });
        assert_eq!(ImageSize::from_label("1024x1792"), ImageSize { width: 1024, height: 1792 });
        assert_eq!(ImageSize::from_label("768x768"), ImageSize { width: 768, height: 768 });
    }

    #[test]
    fn unknown_size_defaults_to_square() {
        assert_eq!(ImageSize::from_label("640x480"), ImageSize::DEFAULT);
        assert_eq!(ImageSize::from_label(""), ImageSize::DEFAULT);
    }

    #[test]
    fn style_controls_suffix_and_preset() {
        let vivid = image("vivid");
        assert!(vivid.styled_prompt().ends_with("dramatic lighting"));
        assert_eq!(vivid.style_preset(), "enhance");

        let natural = image("natural");
        assert!(natural.styled_prompt().ends_with("soft lighting, realistic"));
        assert_eq!(natural.style_preset(), "natural");
    }

    #[test]
    fn request_defaults_fill_size_and_style() {
        let req: ImageRequest = serde_json::from_str(r#"{"prompt":"fox"}"#).unwrap();
        assert_eq!(req.size, "1024x1024");
        assert_eq!(req.style, "vivid");
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let req: ImageRequest =
            serde_json::from_str(r#"{"prompt":null,"size":null,"style":null}"#).unwrap();
        assert_eq!(req.prompt, "");
        assert_eq!(req.size, "1024x1024");
        assert_eq!(req.style, "vivid");
    }

    #[test]
    fn artifact_becomes_png_data_url() {
        let art = ImageArtifact {
            base64: "AAAA".to_string(),
            seed: Some(7),
        };
        assert_eq!(art.data_url(), "data:image/png;base64,AAAA");
    }
}
