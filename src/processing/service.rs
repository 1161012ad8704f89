//! Narration service coordinating extraction, normalization, and tiered summarization.

use crate::{
    config::Config,
    extraction::{ExtractionError, extract_text_from_file},
    metrics::{MetricsSnapshot, SummaryMetrics},
    processing::{
        normalize::normalize,
        summarize::Summarizer,
        truncate::char_len,
        types::{PipelineError, SummaryOptions},
    },
    summarization::{SummarizationClientError, get_summarization_client},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Turns documents into bounded narration summaries.
///
/// The service owns the summarizer (and through it the shared model handle) plus the metrics
/// registry. Construct it once near process start and reuse it across documents.
pub struct NarrationService {
    summarizer: Summarizer,
    metrics: Arc<SummaryMetrics>,
}

impl NarrationService {
    /// Wrap an already-configured summarizer.
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer,
            metrics: Arc::new(SummaryMetrics::new()),
        }
    }

    /// Build the default tier chain from configuration.
    pub fn from_config(config: &Config) -> Result<Self, SummarizationClientError> {
        tracing::info!(provider = ?config.summarization_provider, "Initializing summarization client");
        let client = get_summarization_client(config)?;
        if client.is_none() {
            tracing::info!("Abstractive summaries disabled; starting at the extractive tier");
        }
        let summarizer =
            Summarizer::with_default_chain(client, config.summarization_model.clone())
                .with_tier_timeout(config.summarization_timeout);
        Ok(Self::new(summarizer))
    }

    /// Extract, normalize, and summarize the document at `path`.
    pub async fn summarize_file(
        &self,
        path: &Path,
        options: &SummaryOptions,
    ) -> Result<String, PipelineError> {
        let owned: PathBuf = path.to_path_buf();
        let raw = tokio::task::spawn_blocking(move || extract_text_from_file(&owned))
            .await
            .map_err(|err| ExtractionError::Worker(err.to_string()))??;
        tracing::debug!(path = %path.display(), length = char_len(&raw), "Extracted document text");
        self.summarize_text(&raw, options).await
    }

    /// Normalize and summarize already-extracted text.
    pub async fn summarize_text(
        &self,
        raw: &str,
        options: &SummaryOptions,
    ) -> Result<String, PipelineError> {
        if raw.trim().is_empty() {
            return Err(PipelineError::NoText);
        }
        let cleaned = normalize(raw);
        if cleaned.is_empty() {
            return Err(PipelineError::NoText);
        }

        let outcome = self.summarizer.summarize_traced(&cleaned, options).await;
        if let Some(tier) = outcome.tier {
            self.metrics.record_summary(tier);
            tracing::info!(
                tier = %tier,
                input_chars = char_len(&cleaned),
                summary_chars = char_len(&outcome.text),
                "Summary generated"
            );
        }
        Ok(outcome.text)
    }

    /// Retrieve the current metrics snapshot.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
