//! Simulated video generation: no provider is called, a placeholder URL comes back.

use crate::wire::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};

pub const SIMULATED_VIDEO_MESSAGE: &str =
    "Video generation is currently simulated. In production, this would generate an actual video.";

fn default_duration() -> u32 {
    5
}

fn default_style() -> String {
    "realistic".to_string()
}

fn duration_or_default<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(de)?.unwrap_or_else(default_duration))
}

fn style_or_default<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_else(default_style))
}

/// Body of `generate-video`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(default = "default_duration", deserialize_with = "duration_or_default")]
    pub duration: u32,
    #[serde(default = "default_style", deserialize_with = "style_or_default")]
    pub style: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub success: bool,
    pub video_url: String,
    pub prompt: String,
    pub duration: u32,
    pub style: String,
    pub message: String,
}

pub fn simulate_video(request: &VideoRequest, placeholder_url: &str) -> VideoResult {
    VideoResult {
        success: true,
        video_url: placeholder_url.to_string(),
        prompt: request.prompt.clone(),
        duration: request.duration,
        style: request.style.clone(),
        message: SIMULATED_VIDEO_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_placeholder() {
        let req: VideoRequest = serde_json::from_str(r#"{"prompt":"sunrise timelapse"}"#).unwrap();
        assert_eq!(req.duration, 5);
        assert_eq!(req.style, "realistic");

        let result = simulate_video(&req, "https://example.test/placeholder.png");
        assert!(result.success);
        assert_eq!(result.video_url, "https://example.test/placeholder.png");
        assert_eq!(result.message, SIMULATED_VIDEO_MESSAGE);
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let req: VideoRequest =
            serde_json::from_str(r#"{"prompt":null,"duration":null,"style":null}"#).unwrap();
        assert_eq!(req.prompt, "");
        assert_eq!(req.duration, 5);
        assert_eq!(req.style, "realistic");
    }

    #[test]
    fn serializes_camel_case() {
        let req: VideoRequest = serde_json::from_str(r#"{"prompt":"p","duration":9}"#).unwrap();
        let json = serde_json::to_value(simulate_video(&req, "u")).unwrap();
        assert_eq!(json["videoUrl"], "u");
        assert_eq!(json["duration"], 9);
    }
}
