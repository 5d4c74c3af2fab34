//! Provider seams: hosted text and image generation, plus the simulated video path.
//!
//! The gateway holds trait objects so tests can swap in local fakes.

mod chat;
mod stability;
mod video;

pub use chat::ChatCompletionClient;
pub use stability::{ImageArtifact, ImageRequest, ImageSize, StabilityClient};
pub use video::{simulate_video, VideoRequest, VideoResult, SIMULATED_VIDEO_MESSAGE};

use crate::error::Result;
use crate::prompts::PromptPair;
use async_trait::async_trait;

/// Hosted text model: system + user prompt in, generated text out.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompts: &PromptPair) -> Result<String>;
}

/// Hosted image model.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn text_to_image(&self, request: &ImageRequest) -> Result<ImageArtifact>;
}
