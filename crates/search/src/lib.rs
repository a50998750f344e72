//! Azure AI Search client and document retriever for quarry.
//!
//! The [`AzureSearchClient`] speaks the index service's REST wire format;
//! the [`Retriever`] composes it with the embedding endpoint to issue one
//! hybrid (lexical + vector) query per user question. The index service's
//! relevance ranking is trusted fully — no local filtering, scoring, or
//! deduplication happens on this side.

pub mod client;
pub mod retriever;

pub use client::AzureSearchClient;
pub use retriever::Retriever;
