//! Configuration loading and validation for quarry.
//!
//! All configuration is sourced from the process environment, read once
//! at startup via [`AppConfig::from_env`], and validated eagerly: a
//! missing or malformed required variable is a typed [`ConfigError`]
//! produced before any network call. The validated config is then passed
//! by reference into each component's constructor.

use serde::{Deserialize, Serialize};

/// The root configuration structure.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// External search index settings
    pub search: SearchConfig,

    /// Chat/embedding model settings
    pub openai: OpenAiConfig,

    /// Context assembly settings
    pub context: ContextConfig,

    /// Gateway HTTP server settings
    pub gateway: GatewayConfig,
}

/// Azure AI Search connection settings. All three are required.
#[derive(Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Service endpoint URL, e.g. `https://<name>.search.windows.net`
    pub endpoint: String,

    /// Admin/query API key
    pub api_key: String,

    /// Name of the index to query
    pub index_name: String,
}

/// OpenAI-compatible model settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key (required)
    pub api_key: String,

    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Chat-completion model id; also used to resolve the tokenizer
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Embedding model id
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
}

/// Context assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Token budget for the retrieved source text
    #[serde(default = "default_max_source_tokens")]
    pub max_source_tokens: usize,
}

/// Gateway HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_chat_model() -> String {
    "gpt-3.5-turbo".into()
}
fn default_embedding_model() -> String {
    "text-embedding-ada-002".into()
}
fn default_max_source_tokens() -> usize {
    3000
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}

/// Redact a secret string for Debug output.
fn redact(_: &str) -> &'static str {
    "[REDACTED]"
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("search", &self.search)
            .field("openai", &self.openai)
            .field("context", &self.context)
            .field("gateway", &self.gateway)
            .finish()
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &redact(&self.api_key))
            .field("index_name", &self.index_name)
            .finish()
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("embedding_model", &self.embedding_model)
            .finish()
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Required variables:
    /// - `AZURE_AI_SEARCH_ENDPOINT`
    /// - `AZURE_AI_SEARCH_API_KEY`
    /// - `AZURE_AI_SEARCH_INDEX_NAME`
    /// - `OPENAI_API_KEY`
    ///
    /// Optional (with defaults):
    /// - `OPENAI_API_BASE`, `OPENAI_CHAT_COMPLETION_MODEL`,
    ///   `OPENAI_EMBEDDING_MODEL`, `QUARRY_HOST`, `QUARRY_PORT`,
    ///   `QUARRY_MAX_SOURCE_TOKENS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here; tests pass a map-backed closure.
    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let search = SearchConfig {
            endpoint: required(&source, "AZURE_AI_SEARCH_ENDPOINT")?,
            api_key: required(&source, "AZURE_AI_SEARCH_API_KEY")?,
            index_name: required(&source, "AZURE_AI_SEARCH_INDEX_NAME")?,
        };

        if !search.endpoint.starts_with("http://") && !search.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidVar {
                name: "AZURE_AI_SEARCH_ENDPOINT",
                reason: format!("expected an http(s) URL, got: {}", search.endpoint),
            });
        }

        let openai = OpenAiConfig {
            api_key: required(&source, "OPENAI_API_KEY")?,
            base_url: optional(&source, "OPENAI_API_BASE", default_base_url),
            chat_model: optional(&source, "OPENAI_CHAT_COMPLETION_MODEL", default_chat_model),
            embedding_model: optional(&source, "OPENAI_EMBEDDING_MODEL", default_embedding_model),
        };

        let context = ContextConfig {
            max_source_tokens: parse_optional(
                &source,
                "QUARRY_MAX_SOURCE_TOKENS",
                default_max_source_tokens,
            )?,
        };

        let gateway = GatewayConfig {
            host: optional(&source, "QUARRY_HOST", default_host),
            port: parse_optional(&source, "QUARRY_PORT", default_port)?,
        };

        let config = Self {
            search,
            openai,
            context,
            gateway,
        };
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

fn required<F>(source: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match source(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn optional<F>(source: &F, name: &str, default: fn() -> String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    source(name).filter(|v| !v.trim().is_empty()).unwrap_or_else(default)
}

fn parse_optional<F, T>(source: &F, name: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match source(name) {
        Some(value) if !value.trim().is_empty() => {
            value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
                name,
                reason: e.to_string(),
            })
        }
        _ => Ok(default()),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Required environment variable is not set: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}
