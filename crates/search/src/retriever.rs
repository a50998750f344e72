//! Document retriever — embeds the question, then queries the index.

use crate::client::AzureSearchClient;
use quarry_core::error::SearchError;
use quarry_core::provider::{EmbeddingRequest, Provider};
use quarry_core::retrieval::SearchResult;
use std::sync::Arc;
use tracing::debug;

/// Retrieves candidate documents for a user question.
///
/// One hybrid query per call: the question text is the lexical component,
/// and its embedding (from [`Provider::embed`]) is the vector component.
/// Embedding failures surface as [`SearchError::Embedding`] and propagate
/// like any other retrieval failure.
pub struct Retriever {
    provider: Arc<dyn Provider>,
    client: AzureSearchClient,
    embedding_model: String,
}

impl Retriever {
    pub fn new(
        provider: Arc<dyn Provider>,
        client: AzureSearchClient,
        embedding_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            client,
            embedding_model: embedding_model.into(),
        }
    }

    /// Retrieve candidate documents for `question`, in index ranking order.
    pub async fn query(&self, question: &str) -> Result<Vec<SearchResult>, SearchError> {
        let embedding = self
            .provider
            .embed(EmbeddingRequest {
                model: self.embedding_model.clone(),
                inputs: vec![question.to_string()],
            })
            .await?;

        let vector = embedding.embeddings.into_iter().next().ok_or_else(|| {
            SearchError::InvalidResponse("embedding response contained no vectors".into())
        })?;

        let results = self.client.search(question, &vector).await?;
        debug!(count = results.len(), "Retrieved candidate documents");
        Ok(results)
    }
}
