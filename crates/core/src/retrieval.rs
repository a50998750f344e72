//! Retrieval domain types.

use serde::{Deserialize, Serialize};

/// A single document returned by the external search index.
///
/// Results arrive ordered by relevance score, descending. The order is
/// assigned by the index service, is authoritative, and must be preserved
/// downstream — the pipeline never re-sorts, filters, or deduplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The document's subject line.
    pub subject: String,

    /// The document's body text.
    pub contents: String,

    /// Relevance score assigned by the index, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SearchResult {
    pub fn new(subject: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            contents: contents.into(),
            score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_omitted_when_absent() {
        let result = SearchResult::new("A", "short");
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("score"));
    }

    #[test]
    fn deserializes_without_score() {
        let json = r#"{"subject":"A","contents":"short"}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.subject, "A");
        assert!(result.score.is_none());
    }
}
