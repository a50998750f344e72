//! Answer generation — sends the assembled source text and the question
//! to the chat-completion model.

use quarry_core::error::ProviderError;
use quarry_core::message::Message;
use quarry_core::provider::{Provider, ProviderRequest};
use std::sync::Arc;
use tracing::debug;

/// Instruction prepended to the source text in the system message.
const SYSTEM_PROMPT: &str = "You are an assistant that answers questions using the \
numbered source passages below. Each passage starts with its rank index. If the \
passages do not contain the answer, say that you do not know.";

/// Builds the completion payload and invokes the model.
pub struct AnswerGenerator {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
        }
    }

    /// Generate an answer grounded in `source_text`.
    ///
    /// - `Ok(Some(text))` — the top choice's content
    /// - `Ok(None)` — the model returned an empty choice
    /// - `Err(_)` — the completion call failed
    ///
    /// The two "no answer" cases stay distinguishable here; degrading
    /// both to a missing bot message is the orchestrator's decision.
    pub async fn create_response(
        &self,
        source_text: &str,
        question: &str,
    ) -> Result<Option<String>, ProviderError> {
        let system = format!("{SYSTEM_PROMPT}\n\nSources:\n{source_text}");
        let request = ProviderRequest {
            model: self.model.clone(),
            messages: vec![Message::system(system), Message::user(question)],
            temperature: self.temperature,
            max_tokens: None,
        };

        let response = self.provider.complete(request).await?;
        debug!(model = %response.model, "Received completion response");

        let content = response.message.content;
        if content.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quarry_core::provider::{
        EmbeddingRequest, EmbeddingResponse, ProviderResponse,
    };
    use std::sync::Mutex;

    /// Records the request and replies with a canned completion.
    struct RecordingProvider {
        reply: String,
        seen: Mutex<Vec<ProviderRequest>>,
    }

    impl RecordingProvider {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Provider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            self.seen.lock().unwrap().push(request);
            Ok(ProviderResponse {
                message: Message::assistant(&self.reply),
                usage: None,
                model: "gpt-3.5-turbo".into(),
            })
        }

        async fn embed(
            &self,
            _request: EmbeddingRequest,
        ) -> Result<EmbeddingResponse, ProviderError> {
            unimplemented!("generator never calls embed")
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            Err(ProviderError::Network("connection reset".into()))
        }

        async fn embed(
            &self,
            _request: EmbeddingRequest,
        ) -> Result<EmbeddingResponse, ProviderError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn payload_carries_sources_and_question() {
        let provider = Arc::new(RecordingProvider::new("An answer."));
        let generator = AnswerGenerator::new(provider.clone(), "gpt-3.5-turbo");

        let answer = generator
            .create_response("0 subject: A, contents: alpha", "What is alpha?")
            .await
            .unwrap();

        assert_eq!(answer.as_deref(), Some("An answer."));

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages.len(), 2);
        assert!(seen[0].messages[0].content.contains("0 subject: A, contents: alpha"));
        assert_eq!(seen[0].messages[1].content, "What is alpha?");
    }

    #[tokio::test]
    async fn empty_model_reply_is_none() {
        let provider = Arc::new(RecordingProvider::new("  "));
        let generator = AnswerGenerator::new(provider, "gpt-3.5-turbo");

        let answer = generator.create_response("", "anything").await.unwrap();
        assert!(answer.is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let generator = AnswerGenerator::new(Arc::new(FailingProvider), "gpt-3.5-turbo");

        let err = generator.create_response("", "anything").await.unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
    }
}
