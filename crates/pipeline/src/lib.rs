//! Retrieval, context assembly, and answer generation pipeline.
//!
//! The flow for one user turn:
//!
//! 1. [`Retriever`](quarry_search::Retriever) — hybrid search for candidate
//!    documents
//! 2. [`ContextAssembler`] — fold the ranked candidates into a
//!    token-budgeted source text
//! 3. [`AnswerGenerator`] — send source text + question to the
//!    chat-completion model
//!
//! [`ChatPipeline`] is the thin composition of the three, invoked once per
//! user turn; all decisions live in the components.

pub mod assembler;
pub mod generator;
pub mod orchestrator;
pub mod token;

pub use assembler::{AssembledSource, ContextAssembler};
pub use generator::AnswerGenerator;
pub use orchestrator::ChatPipeline;
pub use token::{TiktokenCounter, TokenEstimator};
