//! contentgen-core: categories, prompt assembly, template lookup and provider clients.
//!
//! The gateway builds `GatewayConfig` and `ProviderCredentials` once at startup and passes
//! them to the provider clients here; nothing in this crate reads the environment on a
//! request path.

mod category;
mod config;
mod error;
pub mod prompts;
pub mod provider;
pub mod templates;
mod wire;

pub use category::{
    capitalize, instruction_for, title_for, Category, IconKind, GENERIC_INSTRUCTION, GENERIC_TITLE,
};
pub use config::{
    GatewayConfig, ProviderCredentials, TextEndpoint, LOCALAI_DEFAULT_BASE, TEXT_PROVIDER_ENV_VARS,
};
pub use error::{
    GenerationError, Result, BILLING_MESSAGE, MISSING_RUNWAY_KEY, MISSING_STABILITY_KEY,
    MISSING_TEXT_PROVIDER,
};
pub use prompts::{assemble, GenerationRequest, Mode, PromptPair};
pub use provider::{
    simulate_video, ChatCompletionClient, ImageArtifact, ImageProvider, ImageRequest, ImageSize,
    StabilityClient, TextProvider, VideoRequest, VideoResult, SIMULATED_VIDEO_MESSAGE,
};
pub use templates::{category_document, fallback_document, product_document, ProductKind};
