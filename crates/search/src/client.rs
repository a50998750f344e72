//! Azure AI Search REST client.
//!
//! One POST per query against the documents search endpoint:
//! `{endpoint}/indexes/{index}/docs/search?api-version=...`
//! combining a lexical `search` term with a `vectorQueries` entry.

use quarry_config::SearchConfig;
use quarry_core::error::SearchError;
use quarry_core::retrieval::SearchResult;
use serde::Deserialize;
use tracing::{debug, warn};

/// REST API version the request/response shapes are written against.
const API_VERSION: &str = "2023-11-01";

/// Index field holding the document embedding. Fixed by the index schema.
pub const VECTOR_FIELD: &str = "query_target_vector";

/// Maximum number of results per query, applied by the service via
/// `top` and the vector query's `k`.
pub const MAX_RESULTS: usize = 10;

/// A client for one Azure AI Search index.
///
/// Built once at startup and shared; the inner reqwest client pools
/// connections across calls.
pub struct AzureSearchClient {
    endpoint: String,
    index_name: String,
    api_key: String,
    client: reqwest::Client,
}

impl AzureSearchClient {
    /// Create a client from validated configuration.
    pub fn new(config: &SearchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    /// Issue a single hybrid query: `text` as the lexical component,
    /// `vector` as the similarity component.
    ///
    /// Returns up to [`MAX_RESULTS`] documents in the order the index
    /// ranked them. All failures are typed and propagate — no retry.
    pub async fn search(
        &self,
        text: &str,
        vector: &[f32],
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, self.index_name, API_VERSION
        );

        let body = serde_json::json!({
            "search": text,
            "top": MAX_RESULTS,
            "vectorQueries": [{
                "kind": "vector",
                "vector": vector,
                "k": MAX_RESULTS,
                "fields": VECTOR_FIELD,
            }],
        });

        debug!(index = %self.index_name, "Sending hybrid search request");

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return Err(SearchError::AuthenticationFailed(
                "Invalid search API key or insufficient permissions".into(),
            ));
        }

        if !(200..300).contains(&status) {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Search service returned error");
            return Err(SearchError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: SearchApiResponse =
            response
                .json()
                .await
                .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let results = api_response
            .value
            .into_iter()
            .map(|doc| SearchResult {
                subject: doc.query_target,
                contents: doc.contents,
                score: doc.score,
            })
            .collect();

        Ok(results)
    }
}

// --- Search API types (internal) ---

#[derive(Debug, Deserialize)]
struct SearchApiResponse {
    value: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    query_target: String,
    contents: String,
    #[serde(rename = "@search.score", default)]
    score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use quarry_config::SearchConfig;

    fn config(endpoint: &str) -> SearchConfig {
        SearchConfig {
            endpoint: endpoint.to_string(),
            api_key: "search-key".into(),
            index_name: "docs".into(),
        }
    }

    #[test]
    fn parse_search_response() {
        let data = r#"{
            "value": [
                {"@search.score": 1.8, "query_target": "Billing", "contents": "How invoices work"},
                {"query_target": "Refunds", "contents": "Refund policy"}
            ]
        }"#;
        let parsed: SearchApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.value.len(), 2);
        assert_eq!(parsed.value[0].query_target, "Billing");
        assert_eq!(parsed.value[0].score, Some(1.8));
        assert!(parsed.value[1].score.is_none());
    }

    #[tokio::test]
    async fn search_preserves_index_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/indexes/docs/search")
                    .query_param("api-version", API_VERSION)
                    .header("api-key", "search-key");
                then.status(200).json_body(serde_json::json!({
                    "value": [
                        {"@search.score": 2.1, "query_target": "B", "contents": "second doc"},
                        {"@search.score": 1.4, "query_target": "A", "contents": "first doc"}
                    ]
                }));
            })
            .await;

        let client = AzureSearchClient::new(&config(&server.base_url()));
        let results = client.search("question", &[0.1, 0.2]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].subject, "B");
        assert_eq!(results[1].subject, "A");
    }

    #[tokio::test]
    async fn search_sends_hybrid_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/indexes/docs/search")
                    .json_body_includes(
                        r#"{
                            "search": "what is a refund",
                            "top": 10,
                            "vectorQueries": [{"kind": "vector", "k": 10, "fields": "query_target_vector"}]
                        }"#,
                    );
                then.status(200).json_body(serde_json::json!({"value": []}));
            })
            .await;

        let client = AzureSearchClient::new(&config(&server.base_url()));
        let results = client.search("what is a refund", &[0.5]).await.unwrap();

        mock.assert_async().await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn search_maps_auth_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/indexes/docs/search");
                then.status(403).body("forbidden");
            })
            .await;

        let client = AzureSearchClient::new(&config(&server.base_url()));
        let err = client.search("question", &[0.1]).await.unwrap_err();

        assert!(matches!(err, SearchError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn search_maps_service_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/indexes/docs/search");
                then.status(503).body("unavailable");
            })
            .await;

        let client = AzureSearchClient::new(&config(&server.base_url()));
        let err = client.search("question", &[0.1]).await.unwrap_err();

        assert!(matches!(err, SearchError::ApiError { status_code: 503, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/indexes/docs/search");
                then.status(200).body("not json");
            })
            .await;

        let client = AzureSearchClient::new(&config(&server.base_url()));
        let err = client.search("question", &[0.1]).await.unwrap_err();

        assert!(matches!(err, SearchError::InvalidResponse(_)));
    }
}
