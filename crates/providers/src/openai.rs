//! OpenAI-compatible provider implementation.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, and any endpoint that
//! exposes the OpenAI `/v1/chat/completions` and `/v1/embeddings` wire
//! format.

use async_trait::async_trait;
use quarry_config::OpenAiConfig;
use quarry_core::error::ProviderError;
use quarry_core::message::Message;
use quarry_core::provider::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// An OpenAI-compatible model provider.
///
/// Built once at startup and shared via `Arc`; the inner reqwest client
/// pools connections across calls.
pub struct OpenAiCompatProvider {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a new OpenAI-compatible provider.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a provider from validated configuration.
    pub fn from_config(config: &OpenAiConfig) -> Self {
        Self::new("openai", &config.base_url, &config.api_key)
    }

    /// Convert our Message types to OpenAI API format.
    fn to_api_messages(messages: &[Message]) -> Vec<ApiMessage> {
        messages
            .iter()
            .map(|m| ApiMessage {
                role: match m.role {
                    quarry_core::message::Role::User => "user".into(),
                    quarry_core::message::Role::Assistant => "assistant".into(),
                    quarry_core::message::Role::System => "system".into(),
                },
                content: Some(m.content.clone()),
            })
            .collect()
    }
}

#[async_trait]
impl quarry_core::Provider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut body = serde_json::json!({
            "model": request.model,
            "messages": Self::to_api_messages(&request.messages),
            "temperature": request.temperature,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        debug!(provider = %self.name, model = %request.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let choice =
            api_response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| ProviderError::ApiError {
                    status_code: 200,
                    message: "No choices in response".into(),
                })?;

        let message = Message::assistant(choice.message.content.unwrap_or_default());

        let usage = api_response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ProviderResponse {
            message,
            usage,
            model: api_response.model,
        })
    }

    async fn embed(
        &self,
        request: EmbeddingRequest,
    ) -> std::result::Result<EmbeddingResponse, ProviderError> {
        let url = format!("{}/embeddings", self.base_url);

        let body = serde_json::json!({
            "model": request.model,
            "input": request.inputs,
            "encoding_format": "float",
        });

        debug!(
            provider = %self.name,
            model = %request.model,
            count = request.inputs.len(),
            "Sending embedding request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }
        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed("Invalid API key".into()));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_resp: EmbeddingApiResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse embedding response: {e}"),
            })?;

        let embeddings = api_resp.data.into_iter().map(|d| d.embedding).collect();

        let usage = api_resp.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: 0,
            total_tokens: u.total_tokens,
        });

        Ok(EmbeddingResponse {
            embeddings,
            model: api_resp.model,
            usage,
        })
    }

    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    model: String,
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

// --- Embedding API types ---

#[derive(Debug, Deserialize)]
struct EmbeddingApiResponse {
    data: Vec<EmbeddingData>,
    model: String,
    usage: Option<EmbeddingApiUsage>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingApiUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_provider(base_url: &str) -> OpenAiCompatProvider {
        OpenAiCompatProvider::new("openai", base_url, "sk-test")
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = OpenAiCompatProvider::new("openai", "https://api.openai.com/v1/", "sk-test");
        assert_eq!(provider.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn message_conversion() {
        let messages = vec![Message::system("You are helpful"), Message::user("Hello")];
        let api_messages = OpenAiCompatProvider::to_api_messages(&messages);
        assert_eq!(api_messages.len(), 2);
        assert_eq!(api_messages[0].role, "system");
        assert_eq!(api_messages[1].role, "user");
    }

    #[test]
    fn parse_completion_response() {
        let data = r#"{
            "model": "gpt-3.5-turbo",
            "choices": [{"message": {"role": "assistant", "content": "Hi there"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("Hi there"));
        assert_eq!(parsed.usage.as_ref().unwrap().total_tokens, 15);
    }

    #[test]
    fn parse_embedding_response() {
        let data = r#"{
            "data": [
                {"embedding": [0.1, 0.2, 0.3], "index": 0}
            ],
            "model": "text-embedding-ada-002",
            "usage": {"prompt_tokens": 8, "total_tokens": 8}
        }"#;
        let parsed: EmbeddingApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2, 0.3]);
        assert_eq!(parsed.model, "text-embedding-ada-002");
    }

    #[tokio::test]
    async fn complete_returns_top_choice() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(serde_json::json!({
                    "model": "gpt-3.5-turbo",
                    "choices": [
                        {"message": {"role": "assistant", "content": "42"}}
                    ],
                    "usage": {"prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11}
                }));
            })
            .await;

        let provider = test_provider(&server.base_url());
        let response = provider
            .complete(ProviderRequest {
                model: "gpt-3.5-turbo".into(),
                messages: vec![Message::user("What is the answer?")],
                temperature: 0.7,
                max_tokens: None,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.message.content, "42");
        assert_eq!(response.usage.unwrap().total_tokens, 11);
    }

    #[tokio::test]
    async fn complete_maps_auth_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401).body("unauthorized");
            })
            .await;

        let provider = test_provider(&server.base_url());
        let err = provider
            .complete(ProviderRequest {
                model: "gpt-3.5-turbo".into(),
                messages: vec![Message::user("hi")],
                temperature: 0.7,
                max_tokens: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn complete_maps_rate_limit() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("slow down");
            })
            .await;

        let provider = test_provider(&server.base_url());
        let err = provider
            .complete(ProviderRequest {
                model: "gpt-3.5-turbo".into(),
                messages: vec![Message::user("hi")],
                temperature: 0.7,
                max_tokens: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn embed_returns_vectors_in_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/embeddings");
                then.status(200).json_body(serde_json::json!({
                    "data": [
                        {"embedding": [0.1, 0.2], "index": 0},
                        {"embedding": [0.3, 0.4], "index": 1}
                    ],
                    "model": "text-embedding-ada-002",
                    "usage": {"prompt_tokens": 4, "total_tokens": 4}
                }));
            })
            .await;

        let provider = test_provider(&server.base_url());
        let response = provider
            .embed(EmbeddingRequest {
                model: "text-embedding-ada-002".into(),
                inputs: vec!["one".into(), "two".into()],
            })
            .await
            .unwrap();

        assert_eq!(response.embeddings.len(), 2);
        assert_eq!(response.embeddings[0], vec![0.1, 0.2]);
        assert_eq!(response.embeddings[1], vec![0.3, 0.4]);
    }

    #[tokio::test]
    async fn empty_choices_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(serde_json::json!({
                    "model": "gpt-3.5-turbo",
                    "choices": []
                }));
            })
            .await;

        let provider = test_provider(&server.base_url());
        let err = provider
            .complete(ProviderRequest {
                model: "gpt-3.5-turbo".into(),
                messages: vec![Message::user("hi")],
                temperature: 0.7,
                max_tokens: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::ApiError { .. }));
    }
}
