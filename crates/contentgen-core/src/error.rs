//! Error types for content generation

use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Message returned when the text provider has no usable credential.
pub const MISSING_TEXT_PROVIDER: &str = "Missing AI provider configuration. For LocalAI set LOCALAI_API_KEY and LOCALAI_API_BASE=http://localhost:8080 (or set GEMINI_API_KEY for Gemini). See .env.example.";

pub const MISSING_STABILITY_KEY: &str =
    "Stability AI API key not configured. Please set STABILITY_API_KEY environment variable.";

pub const MISSING_RUNWAY_KEY: &str =
    "Runway ML API key not configured. Please set RUNWAY_API_KEY environment variable.";

/// Message returned when the image provider bills out.
pub const BILLING_MESSAGE: &str = "Insufficient credits or billing issue with Stability AI.";

/// Errors that can occur while generating content
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Credentials or settings are missing. Surfaced before any outbound call.
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    InvalidRequest(String),

    /// Provider answered 402 Payment Required.
    #[error("{}", BILLING_MESSAGE)]
    Billing,

    #[error("Provider returned {status}: {message}")]
    ProviderStatus { status: u16, message: String },

    #[error("Provider returned no content")]
    EmptyResult,

    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider response parse failed: {0}")]
    Decode(String),
}

impl GenerationError {
    /// True for errors raised before contacting a provider.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            GenerationError::Config(_) | GenerationError::InvalidRequest(_)
        )
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Decode(err.to_string())
    }
}
