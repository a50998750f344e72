//! Error types for the quarry domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error type. The error-handling
//! contract differs per context: search errors propagate to the caller,
//! provider errors are degraded to "no answer" by the orchestrator, and
//! token-count errors are degraded to a zero count by the assembler.

use thiserror::Error;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Search request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(#[from] ProviderError),
}

#[derive(Debug, Clone, Error)]
pub enum TokenCountError {
    #[error("No tokenizer known for model: {0}")]
    UnknownModel(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),
}
