//! Context assembly — folds ranked search results into a token-budgeted
//! source text.
//!
//! # Determinism
//!
//! Assembly is a pure function of its inputs: identical results and an
//! identical counter always produce identical output. No caching, no
//! reuse across turns — the source text is recreated fresh on every call.

use crate::token::TokenEstimator;
use quarry_core::retrieval::SearchResult;
use tracing::warn;

/// Default token budget for the retrieved source text.
pub const DEFAULT_MAX_SOURCE_TOKENS: usize = 3000;

/// The assembled source text plus assembly statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledSource {
    /// The concatenated source text, ready for prompt inclusion.
    pub text: String,
    /// Results appended before the budget was hit.
    pub results_included: usize,
    /// Results available in the input.
    pub results_total: usize,
    /// Whether the budget check stopped the loop early.
    pub truncated: bool,
    /// Measured token count of the last accepted budget check.
    pub measured_tokens: usize,
}

/// Folds ranked results into a bounded source text. Stateless — create
/// one and reuse it.
pub struct ContextAssembler {
    counter: Box<dyn TokenEstimator>,
    max_tokens: usize,
}

impl ContextAssembler {
    /// Create an assembler with the given counter and token budget.
    pub fn new(counter: Box<dyn TokenEstimator>, max_tokens: usize) -> Self {
        Self {
            counter,
            max_tokens,
        }
    }

    /// Assemble the source text from results in rank order.
    ///
    /// # Algorithm
    ///
    /// For each result at rank `i` (0-based):
    /// 1. Build the counted candidate: the current source text plus
    ///    `"[{i}]:{i} subject: {subject}, contents: {contents}\n"`.
    /// 2. Measure its token count. A counting failure is logged and
    ///    treated as zero, which deterministically disables truncation.
    /// 3. If the count strictly exceeds the budget, stop — the candidate
    ///    and every later result are discarded.
    /// 4. Otherwise append `"{i} subject: {subject}, contents: {contents}"`.
    ///
    /// The counted candidate carries a `"[{i}]:"` prefix and a trailing
    /// newline that the appended fragment does not; the measured string
    /// is a strict superset of what lands in the output, so the check
    /// can only over-count against the budget.
    pub fn assemble(&self, results: &[SearchResult]) -> AssembledSource {
        let mut text = String::new();
        let mut included = 0;
        let mut truncated = false;
        let mut measured_tokens = 0;

        for (i, result) in results.iter().enumerate() {
            let fragment = format!(
                "{i} subject: {}, contents: {}",
                result.subject, result.contents
            );
            let candidate = format!("{text}[{i}]:{fragment}\n");

            let count = match self.counter.count(&candidate) {
                Ok(n) => n,
                Err(e) => {
                    warn!(rank = i, error = %e, "Token count failed; treating candidate as zero tokens");
                    0
                }
            };

            if count > self.max_tokens {
                truncated = true;
                break;
            }

            text.push_str(&fragment);
            included += 1;
            measured_tokens = count;
        }

        AssembledSource {
            text,
            results_included: included,
            results_total: results.len(),
            truncated,
            measured_tokens,
        }
    }
}
