//! Gateway configuration and provider credentials.
//!
//! Both are resolved once at startup and handed to handlers through shared state.
//! Nothing here writes to the process environment.
//!
//! | Env | Role |
//! |-----|------|
//! | AI_API_KEY | Generic text provider key. |
//! | VERCEL_AI_TOKEN / VERCEL_OIDC_TOKEN | Platform-issued token, used as bearer when no generic key. |
//! | GEMINI_API_KEY | Aliased into the generic key when that is unset. |
//! | LOCALAI_API_KEY / LOCALAI_API_BASE | LocalAI key (aliased like Gemini) and base URL. |
//! | STABILITY_API_KEY | Image provider key. |
//! | RUNWAY_API_KEY | Video provider key. |
//! | AI_MODEL_GROQ | Text model override. |

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOCALAI_DEFAULT_BASE: &str = "http://localhost:8080";

/// Every variable that counts as a text provider credential.
pub const TEXT_PROVIDER_ENV_VARS: [&str; 5] = [
    "AI_API_KEY",
    "VERCEL_AI_TOKEN",
    "VERCEL_OIDC_TOKEN",
    "GEMINI_API_KEY",
    "LOCALAI_API_KEY",
];

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_text_api_base() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_max_output_tokens() -> u32 {
    4000
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_image_api_url() -> String {
    "https://api.stability.ai/v1/generation/stable-diffusion-xl-1024-v1-0/text-to-image".to_string()
}

fn default_video_placeholder_url() -> String {
    "https://via.placeholder.com/640x360/4F46E5/FFFFFF?text=Video+Generated+from+prompt".to_string()
}

/// Server and provider endpoint settings.
///
/// Precedence: env `CONTENTGEN__*` > file (`CONTENTGEN_CONFIG` or `config/gateway.toml`) > defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// OpenAI-compatible base used when LocalAI is not configured.
    #[serde(default = "default_text_api_base")]
    pub text_api_base: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_image_api_url")]
    pub image_api_url: String,
    #[serde(default = "default_video_placeholder_url")]
    pub video_placeholder_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            text_api_base: default_text_api_base(),
            default_model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
            image_api_url: default_image_api_url(),
            video_placeholder_url: default_video_placeholder_url(),
        }
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("CONTENTGEN_CONFIG")
            .unwrap_or_else(|_| "config/gateway.toml".to_string());
        let builder = config::Config::builder()
            .set_default("bind_addr", default_bind_addr())?
            .set_default("port", i64::from(default_port()))?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("CONTENTGEN").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Which text backend a request will be sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEndpoint {
    pub base_url: String,
    pub bearer: Option<String>,
    pub model: String,
}

/// Provider credentials after aliasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// Generic key; holds the Gemini or LocalAI key when only those are set.
    pub ai_api_key: Option<String>,
    pub platform_token: Option<String>,
    pub oidc_token: Option<String>,
    pub gemini_api_key: Option<String>,
    pub localai_api_key: Option<String>,
    pub localai_api_base: Option<String>,
    pub stability_api_key: Option<String>,
    pub runway_api_key: Option<String>,
    pub model_override: Option<String>,
}

impl ProviderCredentials {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve from any variable lookup. Empty values count as unset.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = get("GEMINI_API_KEY");
        let localai_api_key = get("LOCALAI_API_KEY");
        let mut ai_api_key = get("AI_API_KEY");
        let mut localai_api_base = get("LOCALAI_API_BASE");

        if ai_api_key.is_none() {
            ai_api_key = gemini_api_key.clone();
        }
        if localai_api_key.is_some() {
            if localai_api_base.is_none() {
                localai_api_base = Some(LOCALAI_DEFAULT_BASE.to_string());
            }
            if ai_api_key.is_none() {
                ai_api_key = localai_api_key.clone();
            }
        }

        Self {
            ai_api_key,
            platform_token: get("VERCEL_AI_TOKEN"),
            oidc_token: get("VERCEL_OIDC_TOKEN"),
            gemini_api_key,
            localai_api_key,
            localai_api_base,
            stability_api_key: get("STABILITY_API_KEY"),
            runway_api_key: get("RUNWAY_API_KEY"),
            model_override: get("AI_MODEL_GROQ"),
        }
    }

    pub fn has_text_credential(&self) -> bool {
        self.ai_api_key.is_some()
            || self.platform_token.is_some()
            || self.oidc_token.is_some()
            || self.gemini_api_key.is_some()
            || self.localai_api_key.is_some()
            || self.localai_api_base.is_some()
    }

    /// LocalAI wins when its base is set; otherwise the configured hosted base.
    pub fn text_endpoint(&self, config: &GatewayConfig) -> TextEndpoint {
        let base_url = match &self.localai_api_base {
            Some(base) => format!("{}/v1", base.trim_end_matches('/')),
            None => config.text_api_base.trim_end_matches('/').to_string(),
        };
        let bearer = self
            .ai_api_key
            .clone()
            .or_else(|| self.platform_token.clone())
            .or_else(|| self.oidc_token.clone());
        let model = self
            .model_override
            .clone()
            .unwrap_or_else(|| config.default_model.clone());
        TextEndpoint {
            base_url,
            bearer,
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(pairs: &[(&str, &str)]) -> ProviderCredentials {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProviderCredentials::resolve(|name| env.get(name).cloned())
    }

    #[test]
    fn nothing_set_means_no_text_credential() {
        let creds = resolve(&[]);
        assert!(!creds.has_text_credential());
        assert_eq!(creds, ProviderCredentials::default());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let creds = resolve(&[("AI_API_KEY", "  "), ("GEMINI_API_KEY", "")]);
        assert!(!creds.has_text_credential());
    }

    #[test]
    fn gemini_key_populates_generic_key() {
        let creds = resolve(&[("GEMINI_API_KEY", "gem-123")]);
        assert_eq!(creds.ai_api_key.as_deref(), Some("gem-123"));
        assert!(creds.has_text_credential());
        assert_eq!(creds.localai_api_base, None);
    }

    #[test]
    fn generic_key_is_not_replaced_by_gemini() {
        let creds = resolve(&[("AI_API_KEY", "generic"), ("GEMINI_API_KEY", "gem")]);
        assert_eq!(creds.ai_api_key.as_deref(), Some("generic"));
    }

    #[test]
    fn localai_key_defaults_base_when_unset() {
        let creds = resolve(&[("LOCALAI_API_KEY", "local")]);
        assert_eq!(creds.localai_api_base.as_deref(), Some("http://localhost:8080"));
        assert_eq!(creds.ai_api_key.as_deref(), Some("local"));
    }

    #[test]
    fn localai_base_left_untouched_when_set() {
        let creds = resolve(&[
            ("LOCALAI_API_KEY", "local"),
            ("LOCALAI_API_BASE", "http://gpu-box:9000"),
        ]);
        assert_eq!(creds.localai_api_base.as_deref(), Some("http://gpu-box:9000"));
    }

    #[test]
    fn localai_base_alone_counts_as_credential() {
        let creds = resolve(&[("LOCALAI_API_BASE", "http://gpu-box:9000")]);
        assert!(creds.has_text_credential());
        assert_eq!(creds.ai_api_key, None);
    }

    #[test]
    fn endpoint_prefers_localai_and_model_override() {
        let config = GatewayConfig::default();
        let creds = resolve(&[("LOCALAI_API_KEY", "local"), ("AI_MODEL_GROQ", "mixtral")]);
        let endpoint = creds.text_endpoint(&config);
        assert_eq!(endpoint.base_url, "http://localhost:8080/v1");
        assert_eq!(endpoint.bearer.as_deref(), Some("local"));
        assert_eq!(endpoint.model, "mixtral");
    }

    #[test]
    fn endpoint_falls_back_to_platform_token_and_hosted_base() {
        let config = GatewayConfig::default();
        let creds = resolve(&[("VERCEL_AI_TOKEN", "vercel")]);
        let endpoint = creds.text_endpoint(&config);
        assert_eq!(endpoint.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(endpoint.bearer.as_deref(), Some("vercel"));
        assert_eq!(endpoint.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn media_keys_are_independent_of_text_credentials() {
        let creds = resolve(&[("STABILITY_API_KEY", "sk"), ("RUNWAY_API_KEY", "rw")]);
        assert!(!creds.has_text_credential());
        assert_eq!(creds.stability_api_key.as_deref(), Some("sk"));
        assert_eq!(creds.runway_api_key.as_deref(), Some("rw"));
    }

    #[test]
    fn gateway_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.max_output_tokens, 4000);
    }
}
