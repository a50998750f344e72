//! Hosted model provider implementations for quarry.
//!
//! All providers implement the `quarry_core::Provider` trait.

pub mod openai;

pub use openai::OpenAiCompatProvider;
