//! Integration test: provider clients against a local mock HTTP server.
//!
//! Verifies that:
//! 1. Chat completions send the bearer + model and return the first choice.
//! 2. Non-2xx chat responses surface as provider status errors.
//! 3. Stability 402 maps to the billing error.
//! 4. Other Stability errors carry the provider's message and status.
//! 5. Empty artifact lists are reported as empty results.

use contentgen_core::{
    ChatCompletionClient, GenerationError, ImageProvider, ImageRequest, PromptPair,
    StabilityClient, TextEndpoint, TextProvider, BILLING_MESSAGE,
};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn prompts() -> PromptPair {
    PromptPair {
        system: "You are an expert content creator specializing in code.".to_string(),
        user: "Create code content based on these requirements:\n\na todo app".to_string(),
    }
}

fn image_request(size: &str) -> ImageRequest {
    ImageRequest {
        prompt: "a red fox".to_string(),
        size: size.to_string(),
        style: "vivid".to_string(),
    }
}

#[tokio::test]
async fn chat_completion_returns_first_choice() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer test-key")
                .body_contains("llama-3.3-70b-versatile")
                .body_contains("a todo app");
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": "fn main() {}" } }]
            }));
        })
        .await;

    let client = ChatCompletionClient::new(
        TextEndpoint {
            base_url: server.url("/v1"),
            bearer: Some("test-key".to_string()),
            model: "llama-3.3-70b-versatile".to_string(),
        },
        4000,
        Duration::from_secs(5),
    );

    let text = client.generate(&prompts()).await.unwrap();
    assert_eq!(text, "fn main() {}");
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_completion_surfaces_provider_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(503).body("overloaded");
        })
        .await;

    let client = ChatCompletionClient::new(
        TextEndpoint {
            base_url: server.url("/v1"),
            bearer: None,
            model: "m".to_string(),
        },
        100,
        Duration::from_secs(5),
    );

    match client.generate(&prompts()).await {
        Err(GenerationError::ProviderStatus { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "overloaded");
        }
        other => panic!("expected provider status error, got {:?}", other),
    }
}

#[tokio::test]
async fn chat_completion_without_choices_is_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let client = ChatCompletionClient::new(
        TextEndpoint {
            base_url: server.url("/v1"),
            bearer: None,
            model: "m".to_string(),
        },
        100,
        Duration::from_secs(5),
    );

    assert!(matches!(
        client.generate(&prompts()).await,
        Err(GenerationError::EmptyResult)
    ));
}

#[tokio::test]
async fn stability_success_returns_artifact_and_sends_dimensions() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/text-to-image")
                .header("authorization", "Bearer sk-test")
                .json_body_partial(r#"{"width": 512, "height": 512, "style_preset": "enhance"}"#);
            then.status(200).json_body(json!({
                "artifacts": [{ "base64": "iVBORw0KGgo=", "seed": 42, "finishReason": "SUCCESS" }]
            }));
        })
        .await;

    let client = StabilityClient::new(server.url("/text-to-image"), Some("sk-test".to_string()));
    let artifact = client.text_to_image(&image_request("512x512")).await.unwrap();
    assert_eq!(artifact.seed, Some(42));
    assert_eq!(artifact.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    mock.assert_async().await;
}

#[tokio::test]
async fn stability_402_is_billing_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/text-to-image");
            then.status(402).json_body(json!({ "message": "insufficient balance" }));
        })
        .await;

    let client = StabilityClient::new(server.url("/text-to-image"), Some("sk-test".to_string()));
    let err = client.text_to_image(&image_request("1024x1024")).await.unwrap_err();
    assert!(matches!(err, GenerationError::Billing));
    assert_eq!(err.to_string(), BILLING_MESSAGE);
}

#[tokio::test]
async fn stability_other_errors_keep_status_and_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/text-to-image");
            then.status(400).json_body(json!({ "message": "invalid prompt" }));
        })
        .await;

    let client = StabilityClient::new(server.url("/text-to-image"), Some("sk-test".to_string()));
    match client.text_to_image(&image_request("1024x1024")).await {
        Err(GenerationError::ProviderStatus { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "invalid prompt");
        }
        other => panic!("expected provider status error, got {:?}", other),
    }
}

#[tokio::test]
async fn stability_without_artifacts_is_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/text-to-image");
            then.status(200).json_body(json!({ "artifacts": [] }));
        })
        .await;

    let client = StabilityClient::new(server.url("/text-to-image"), Some("sk-test".to_string()));
    assert!(matches!(
        client.text_to_image(&image_request("1024x1024")).await,
        Err(GenerationError::EmptyResult)
    ));
}

#[tokio::test]
async fn stability_without_key_never_calls_out() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/text-to-image");
            then.status(200);
        })
        .await;

    let client = StabilityClient::new(server.url("/text-to-image"), None);
    let err = client.text_to_image(&image_request("1024x1024")).await.unwrap_err();
    assert!(matches!(err, GenerationError::Config(_)));
    assert_eq!(mock.hits_async().await, 0);
}
