//! OpenAI-compatible chat completions (Groq, LocalAI, Gemini's compatibility endpoint).

use super::TextProvider;
use crate::config::TextEndpoint;
use crate::error::{GenerationError, Result};
use crate::prompts::PromptPair;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

pub struct ChatCompletionClient {
    endpoint: TextEndpoint,
    max_tokens: u32,
    client: reqwest::Client,
}

impl ChatCompletionClient {
    pub fn new(endpoint: TextEndpoint, max_tokens: u32, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            endpoint,
            max_tokens,
            client,
        }
    }

    pub fn endpoint(&self) -> &TextEndpoint {
        &self.endpoint
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.base_url)
    }
}

#[async_trait]
impl TextProvider for ChatCompletionClient {
    async fn generate(&self, prompts: &PromptPair) -> Result<String> {
        let body = ChatRequest {
            model: &self.endpoint.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompts.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user,
                },
            ],
            max_tokens: self.max_tokens,
        };

        tracing::info!(
            target: "contentgen::provider",
            model = %self.endpoint.model,
            base = %self.endpoint.base_url,
            "text generation requested"
        );

        let mut req = self.client.post(self.url()).json(&body);
        if let Some(key) = &self.endpoint.bearer {
            req = req.bearer_auth(key);
        }
        let res = req.send().await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(GenerationError::ProviderStatus {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(GenerationError::EmptyResult)
    }
}
