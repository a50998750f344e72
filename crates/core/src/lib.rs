//! # Quarry Core
//!
//! Domain types, traits, and error definitions for the quarry
//! retrieval-augmented chat service. This crate has **zero framework
//! dependencies** — it defines the domain model that all other crates
//! implement against.
//!
//! The external-service seams (`Provider` for chat completions and
//! embeddings) are defined as traits here; implementations live in their
//! respective crates, which keeps the dependency graph pointing inward
//! and makes the pipeline testable with stub implementations.

pub mod error;
pub mod message;
pub mod provider;
pub mod retrieval;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, SearchError, TokenCountError};
pub use message::{ChatTurn, Message, Role};
pub use provider::{EmbeddingRequest, EmbeddingResponse, Provider, ProviderRequest, ProviderResponse};
pub use retrieval::SearchResult;
