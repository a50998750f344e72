//! Token counting via `tiktoken-rs`.
//!
//! The BPE is resolved from the model id once at construction, so an
//! unknown model id fails at startup with a typed error instead of
//! degrading every count to zero at call time.

use quarry_core::error::TokenCountError;
use tiktoken_rs::CoreBPE;

/// Counts tokens the way a specific model's tokenizer would.
///
/// A counting failure is a [`TokenCountError`], never a silent zero —
/// the degraded-mode policy (treat as zero, keep going) belongs to the
/// caller that can log it in context.
pub trait TokenEstimator: Send + Sync {
    fn count(&self, text: &str) -> Result<usize, TokenCountError>;
}

/// [`TokenEstimator`] backed by the tiktoken BPE for a given model.
pub struct TiktokenCounter {
    model: String,
    bpe: CoreBPE,
}

impl TiktokenCounter {
    /// Resolve the tokenizer for `model`.
    pub fn for_model(model: &str) -> Result<Self, TokenCountError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|e| TokenCountError::UnknownModel(format!("{model}: {e}")))?;
        Ok(Self {
            model: model.to_string(),
            bpe,
        })
    }

    /// The model id this counter was resolved for.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for TiktokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiktokenCounter")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl TokenEstimator for TiktokenCounter {
    fn count(&self, text: &str) -> Result<usize, TokenCountError> {
        Ok(self.bpe.encode_with_special_tokens(text).len())
    }
}
