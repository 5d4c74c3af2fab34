//! Content generation gateway: JSON endpoints for text, image, video and M3 generation.
//! Config and provider credentials are resolved once here and shared through `AppState`.

mod handlers;

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use contentgen_core::{
    ChatCompletionClient, GatewayConfig, ImageProvider, ProviderCredentials, StabilityClient,
    TextProvider, TEXT_PROVIDER_ENV_VARS,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub credentials: Arc<ProviderCredentials>,
    pub text: Arc<dyn TextProvider>,
    pub image: Arc<dyn ImageProvider>,
}

impl AppState {
    /// Real provider clients built from resolved config.
    pub fn from_config(config: GatewayConfig, credentials: ProviderCredentials) -> Self {
        let text = ChatCompletionClient::new(
            credentials.text_endpoint(&config),
            config.max_output_tokens,
            Duration::from_secs(config.request_timeout_secs),
        );
        tracing::info!(
            target: "contentgen::gateway",
            base_url = %text.endpoint().base_url,
            model = %text.endpoint().model,
            "text provider endpoint"
        );
        let image = StabilityClient::new(
            config.image_api_url.clone(),
            credentials.stability_api_key.clone(),
        );
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            text: Arc::new(text),
            image: Arc::new(image),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/categories", get(handlers::catalog::list_categories))
        .route(
            "/api/generate-content",
            post(handlers::content::generate_content),
        )
        .route("/api/generate-image", post(handlers::image::generate_image))
        .route("/api/generate-video", post(handlers::video::generate_video))
        .route("/api/m3-generate", post(handlers::m3::m3_generate))
        .route(
            "/api/simulate-content",
            post(handlers::catalog::simulate_content),
        )
        .route(
            "/api/generate-sample",
            post(handlers::catalog::generate_sample),
        )
        .with_state(state)
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[contentgen-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(target: "contentgen::gateway", "Config load failed: {}", e);
            std::process::exit(1);
        }
    };

    let credentials = ProviderCredentials::from_env();
    if !credentials.has_text_credential() {
        tracing::warn!(
            target: "contentgen::gateway",
            "No text provider credential. Set one of {} in .env; generate-content will answer 400 until then.",
            TEXT_PROVIDER_ENV_VARS.join(", ")
        );
    }

    let addr = config.listen_addr();
    let app = router(AppState::from_config(config, credentials));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(target: "contentgen::gateway", "Bind {} failed: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!(target: "contentgen::gateway", "Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(target: "contentgen::gateway", "Server error: {}", e);
    }
}

async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::info!(
        target: "contentgen::gateway",
        %method,
        %path,
        status = response.status().as_u16(),
        "request handled"
    );
    response
}

async fn health() -> &'static str {
    "OK"
}
