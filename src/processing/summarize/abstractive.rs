//! Model-backed summaries: chunk, condense each chunk, then recompress until the result fits.

use crate::processing::chunking::chunk_text;
use crate::processing::truncate::{char_len, truncate_to_boundary};
use crate::processing::types::{SummaryOptions, TierError};
use crate::summarization::{SummarizationClient, SummarizationRequest};

/// Chunks shorter than this many characters are passed through without a model call.
pub const PASSTHROUGH_THRESHOLD: usize = 40;
/// Upper bound on recompression passes over the combined summary.
pub const MAX_CONVERGENCE_ITERATIONS: usize = 6;

const FIRST_PASS_FLOOR: usize = 5;
const FIRST_PASS_CAP: usize = 150;
const FIRST_PASS_MIN_FACTOR: f64 = 0.6;
const CONVERGENCE_RATIO: f64 = 0.4;
const CONVERGENCE_FLOOR: usize = 25;
const CONVERGENCE_CAP: usize = 120;
const CONVERGENCE_MIN_FLOOR: usize = 10;

/// Output-length bounds requested from the model for one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Lower bound; always below `max` when `max > 0`.
    pub min: usize,
    /// Upper bound.
    pub max: usize,
}

impl LengthBounds {
    /// Bounds for the initial per-chunk pass.
    pub fn first_pass(chunk_len: usize, options: &SummaryOptions) -> Self {
        let mut computed =
            ((chunk_len as f64 * options.target_ratio) as usize).max(FIRST_PASS_FLOOR);
        if computed >= chunk_len {
            computed = chunk_len.saturating_sub(1).max(1);
        }
        let max = options
            .model_max_len
            .unwrap_or_else(|| computed.min(FIRST_PASS_CAP));
        let min = ((max as f64 * FIRST_PASS_MIN_FACTOR) as usize).max(FIRST_PASS_FLOOR);
        Self::ordered(min, max)
    }

    /// Bounds for a recompression pass over already-summarized text.
    pub fn convergence(chunk_len: usize, options: &SummaryOptions) -> Self {
        let auto_max = ((chunk_len as f64 * CONVERGENCE_RATIO) as usize)
            .clamp(CONVERGENCE_FLOOR, CONVERGENCE_CAP);
        let max = options.model_max_len.unwrap_or(auto_max);
        let min = options
            .model_min_len
            .min(CONVERGENCE_MIN_FLOOR.max(max.saturating_sub(1)));
        Self::ordered(min, max)
    }

    fn ordered(min: usize, max: usize) -> Self {
        if min >= max {
            Self {
                min: max.saturating_sub(1),
                max,
            }
        } else {
            Self { min, max }
        }
    }
}

/// Build the instruction sent to the model for one chunk.
pub(crate) fn build_chunk_prompt(chunk: &str, bounds: LengthBounds) -> String {
    format!(
        "System: You condense document excerpts for narration. Keep facts, names, and numbers. \
         Avoid speculation. Reply with a single plain-prose paragraph of {min} to {max} words \
         and nothing else.\n\nExcerpt:\n{chunk}",
        min = bounds.min,
        max = bounds.max,
    )
}

/// Summarize `text` with the model, recompressing until it fits `options.max_chars`.
///
/// Blank input yields an empty summary without a model call. Any model error fails the whole
/// tier. Chunks for which the model returns nothing are dropped; if every chunk comes back empty
/// the tier fails with [`TierError::EmptyOutput`].
pub async fn summarize_abstractive(
    client: &dyn SummarizationClient,
    model: &str,
    text: &str,
    options: &SummaryOptions,
) -> Result<String, TierError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    let mut parts = Vec::new();
    for chunk in chunk_text(text, options.chunk_size)? {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let len = char_len(chunk);
        if len < PASSTHROUGH_THRESHOLD {
            parts.push(chunk.to_string());
            continue;
        }
        let bounds = LengthBounds::first_pass(len, options);
        let condensed = condense(client, model, chunk, bounds).await?;
        if !condensed.is_empty() {
            parts.push(condensed);
        }
    }

    let mut combined = parts.join(" ");
    if combined.is_empty() {
        return Err(TierError::EmptyOutput);
    }
    tracing::debug!(
        chunks = parts.len(),
        length = char_len(&combined),
        "Initial abstractive pass complete"
    );

    let mut iteration = 0;
    while char_len(&combined) > options.max_chars && iteration < MAX_CONVERGENCE_ITERATIONS {
        iteration += 1;
        let mut next = Vec::new();
        for chunk in chunk_text(&combined, options.chunk_size)? {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            let bounds = LengthBounds::convergence(char_len(chunk), options);
            let condensed = condense(client, model, chunk, bounds).await?;
            if !condensed.is_empty() {
                next.push(condensed);
            }
        }
        let candidate = next.join(" ");
        if candidate.is_empty() {
            tracing::debug!(
                iteration,
                "Convergence pass returned nothing; keeping previous text"
            );
            break;
        }
        tracing::debug!(
            iteration,
            length = char_len(&candidate),
            "Convergence pass complete"
        );
        combined = candidate;
    }

    Ok(truncate_to_boundary(&combined, options.max_chars))
}

async fn condense(
    client: &dyn SummarizationClient,
    model: &str,
    chunk: &str,
    bounds: LengthBounds,
) -> Result<String, TierError> {
    let summary = client
        .generate_summary(SummarizationRequest {
            model: model.to_string(),
            prompt: build_chunk_prompt(chunk, bounds),
            max_length: bounds.max,
            min_length: bounds.min,
        })
        .await?;
    Ok(summary.trim().to_string())
}
