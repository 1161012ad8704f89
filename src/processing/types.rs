//! Core data types and error definitions for the summarization pipeline.

use crate::{
    extraction::ExtractionError, processing::chunking::DEFAULT_CHUNK_SIZE,
    summarization::SummarizationClientError,
};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while splitting text into model-sized segments.
#[derive(Debug, Error)]
pub enum ChunkingError {
    /// Caller requested an impossible chunk size.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
}

/// Tier-local failures. The orchestrator absorbs these and moves on to the next tier.
#[derive(Debug, Error)]
pub enum TierError {
    /// The tier's backing model or toolkit is not configured.
    #[error("tier unavailable: {0}")]
    Unavailable(String),
    /// The model provider failed while condensing a chunk.
    #[error("model invocation failed: {0}")]
    Model(#[from] SummarizationClientError),
    /// The tier ran but produced nothing usable.
    #[error("tier produced an empty summary")]
    EmptyOutput,
    /// No sentence boundaries were found in the input.
    #[error("no sentences found in input")]
    NoSentences,
    /// Every token was a stop-word, numeral, or punctuation.
    #[error("no valid tokens for frequency scoring")]
    NoScoreableTokens,
    /// The tier exceeded its deadline.
    #[error("tier timed out after {0:?}")]
    TimedOut(Duration),
    /// Chunking rejected the configured chunk size.
    #[error("failed to chunk input: {0}")]
    Chunking(#[from] ChunkingError),
}

/// Errors surfaced to callers of [`crate::processing::NarrationService`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Upstream extraction failed; no summary can be produced.
    #[error("Failed to extract document text: {0}")]
    Extraction(#[from] ExtractionError),
    /// The document contained no text to summarize.
    #[error("no text extracted from document")]
    NoText,
}

/// Identifies a summarization strategy in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    /// Model-generated summary with iterative recompression.
    Abstractive,
    /// Frequency-scored sentence selection.
    Extractive,
    /// First sentences of the document.
    Heuristic,
}

impl TierKind {
    /// Stable lowercase name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abstractive => "abstractive",
            Self::Extractive => "extractive",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length and compression bounds shared by every tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryOptions {
    /// Hard cap on the final summary length, in characters.
    pub max_chars: usize,
    /// Lower length hint for convergence passes.
    pub model_min_len: usize,
    /// Overrides the computed maximum model output length when set.
    pub model_max_len: Option<usize>,
    /// Desired compression ratio per chunk.
    pub target_ratio: f64,
    /// Chunk size, in characters, for model input.
    pub chunk_size: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_chars: 2000,
            model_min_len: 25,
            model_max_len: None,
            target_ratio: 0.6,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SummaryOptions {
    /// Override the final length cap.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_are_lowercase() {
        assert_eq!(TierKind::Abstractive.to_string(), "abstractive");
        assert_eq!(TierKind::Extractive.to_string(), "extractive");
        assert_eq!(TierKind::Heuristic.to_string(), "heuristic");
    }

    #[test]
    fn default_options_match_documented_values() {
        let options = SummaryOptions::default();
        assert_eq!(options.max_chars, 2000);
        assert_eq!(options.model_min_len, 25);
        assert_eq!(options.model_max_len, None);
        assert_eq!(options.chunk_size, 1000);
        assert_eq!(options.with_max_chars(300).max_chars, 300);
    }
}
