//! Chat orchestration — the thin composition invoked once per user turn.

use crate::assembler::ContextAssembler;
use crate::generator::AnswerGenerator;
use crate::token::TiktokenCounter;
use quarry_config::AppConfig;
use quarry_core::error::{SearchError, TokenCountError};
use quarry_core::message::ChatTurn;
use quarry_core::provider::Provider;
use quarry_search::{AzureSearchClient, Retriever};
use std::sync::Arc;
use tracing::{debug, error, info};

/// One retrieval-augmented chat pipeline: retrieve → assemble → generate.
///
/// Stateless across turns — the source text is rebuilt for every call and
/// the chat history is owned by the caller. Holds only the shared,
/// constructed-once clients.
pub struct ChatPipeline {
    retriever: Retriever,
    assembler: ContextAssembler,
    generator: AnswerGenerator,
}

impl ChatPipeline {
    pub fn new(
        retriever: Retriever,
        assembler: ContextAssembler,
        generator: AnswerGenerator,
    ) -> Self {
        Self {
            retriever,
            assembler,
            generator,
        }
    }

    /// Wire the full pipeline from validated configuration and a shared
    /// provider. Fails only if the configured chat model has no known
    /// tokenizer.
    pub fn from_config(
        config: &AppConfig,
        provider: Arc<dyn Provider>,
    ) -> Result<Self, TokenCountError> {
        let retriever = Retriever::new(
            provider.clone(),
            AzureSearchClient::new(&config.search),
            &config.openai.embedding_model,
        );
        let counter = TiktokenCounter::for_model(&config.openai.chat_model)?;
        let assembler = ContextAssembler::new(Box::new(counter), config.context.max_source_tokens);
        let generator = AnswerGenerator::new(provider, &config.openai.chat_model);
        Ok(Self::new(retriever, assembler, generator))
    }

    /// Produce an answer for `question`, or `None` when generation
    /// yields nothing.
    ///
    /// Retrieval failures propagate to the caller; generation failures
    /// are logged and degraded to `None`.
    pub async fn answer(&self, question: &str) -> Result<Option<String>, SearchError> {
        let results = self.retriever.query(question).await?;

        let source = self.assembler.assemble(&results);
        debug!(
            included = source.results_included,
            total = source.results_total,
            truncated = source.truncated,
            tokens = source.measured_tokens,
            "Assembled source text"
        );

        match self.generator.create_response(&source.text, question).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                error!(error = %e, "Chat completion failed; returning no answer");
                Ok(None)
            }
        }
    }

    /// Handle one UI submit: answer the message, append the turn, and
    /// return the cleared input together with the updated history.
    pub async fn handle_submit(
        &self,
        user_message: &str,
        mut chat_history: Vec<ChatTurn>,
    ) -> Result<(String, Vec<ChatTurn>), SearchError> {
        info!("Handling chat submit");
        let bot = self.answer(user_message).await?;
        chat_history.push(ChatTurn::new(user_message, bot));
        Ok((String::new(), chat_history))
    }
}
