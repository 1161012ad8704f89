//! Tiered summarization with graceful degradation.
//!
//! Tiers are tried in a fixed order (abstractive, extractive) and the first non-empty result
//! wins. The heuristic tier is not part of the list: it is always the final step, so a
//! non-empty input always yields a non-empty summary. Tier failures are logged and absorbed.

mod abstractive;
mod extractive;
mod heuristic;
mod lexicon;

pub use abstractive::{
    LengthBounds, MAX_CONVERGENCE_ITERATIONS, PASSTHROUGH_THRESHOLD, summarize_abstractive,
};
pub use extractive::{EXTRACTIVE_SENTENCES, summarize_extractive};
pub use heuristic::{HEURISTIC_SENTENCES, split_sentences, summarize_heuristic};

use crate::processing::truncate::{ELLIPSIS, char_len, truncate_to_boundary};
use crate::processing::types::{SummaryOptions, TierError, TierKind};
use crate::summarization::SummarizationClient;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Contract shared by every summarization strategy.
#[async_trait]
pub trait SummaryTier: Send + Sync {
    /// Which strategy this tier implements.
    fn kind(&self) -> TierKind;

    /// Condense `text` within `options.max_chars`, or report why the tier cannot.
    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, TierError>;
}

/// Model-backed tier. Fails fast when no model handle is configured.
pub struct AbstractiveTier {
    client: Option<Arc<dyn SummarizationClient>>,
    model: String,
}

impl AbstractiveTier {
    /// Wrap a shared model handle; `None` makes the tier permanently unavailable.
    pub fn new(client: Option<Arc<dyn SummarizationClient>>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl SummaryTier for AbstractiveTier {
    fn kind(&self) -> TierKind {
        TierKind::Abstractive
    }

    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, TierError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        let Some(client) = self.client.as_deref() else {
            return Err(TierError::Unavailable(
                "no summarization provider configured".into(),
            ));
        };
        summarize_abstractive(client, &self.model, text, options).await
    }
}

/// Frequency-scored sentence selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractiveTier;

#[async_trait]
impl SummaryTier for ExtractiveTier {
    fn kind(&self) -> TierKind {
        TierKind::Extractive
    }

    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, TierError> {
        summarize_extractive(text, options.max_chars)
    }
}

/// Opening sentences of the document. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTier;

#[async_trait]
impl SummaryTier for HeuristicTier {
    fn kind(&self) -> TierKind {
        TierKind::Heuristic
    }

    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String, TierError> {
        Ok(summarize_heuristic(text, options.max_chars))
    }
}

/// Summary text together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryOutcome {
    pub(crate) text: String,
    pub(crate) tier: Option<TierKind>,
}

/// Orchestrates the fallback chain.
pub struct Summarizer {
    tiers: Vec<Box<dyn SummaryTier>>,
    tier_timeout: Option<Duration>,
}

impl Summarizer {
    /// Build an orchestrator over `tiers`, tried in order before the heuristic fallback.
    pub fn new(tiers: Vec<Box<dyn SummaryTier>>) -> Self {
        Self {
            tiers,
            tier_timeout: None,
        }
    }

    /// The standard chain: abstractive (when a model handle exists), then extractive.
    pub fn with_default_chain(
        client: Option<Arc<dyn SummarizationClient>>,
        model: impl Into<String>,
    ) -> Self {
        Self::new(vec![
            Box::new(AbstractiveTier::new(client, model)),
            Box::new(ExtractiveTier),
        ])
    }

    /// Treat any tier running longer than `timeout` as failed.
    pub fn with_tier_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.tier_timeout = timeout;
        self
    }

    /// Summarize `text`. Empty input yields an empty string without invoking any tier.
    pub async fn summarize(&self, text: &str, options: &SummaryOptions) -> String {
        self.summarize_traced(text, options).await.text
    }

    pub(crate) async fn summarize_traced(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> SummaryOutcome {
        if text.trim().is_empty() {
            return SummaryOutcome {
                text: String::new(),
                tier: None,
            };
        }

        for tier in &self.tiers {
            let kind = tier.kind();
            match self.run_tier(tier.as_ref(), text, options).await {
                Ok(summary) if !summary.trim().is_empty() => {
                    tracing::debug!(tier = %kind, length = char_len(&summary), "Tier succeeded");
                    return SummaryOutcome {
                        text: enforce_cap(summary, options.max_chars),
                        tier: Some(kind),
                    };
                }
                Ok(_) => {
                    tracing::warn!(tier = %kind, "Tier returned an empty summary; falling back");
                }
                Err(error) => {
                    tracing::warn!(tier = %kind, error = %error, "Tier failed; falling back");
                }
            }
        }

        SummaryOutcome {
            text: summarize_heuristic(text, options.max_chars),
            tier: Some(TierKind::Heuristic),
        }
    }

    async fn run_tier(
        &self,
        tier: &dyn SummaryTier,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<String, TierError> {
        match self.tier_timeout {
            Some(limit) => tokio::time::timeout(limit, tier.summarize(text, options))
                .await
                .map_err(|_| TierError::TimedOut(limit))?,
            None => tier.summarize(text, options).await,
        }
    }
}

/// Final guard for tiers that overshoot their own cap.
fn enforce_cap(summary: String, max_chars: usize) -> String {
    if char_len(&summary) > max_chars + ELLIPSIS.len() {
        truncate_to_boundary(&summary, max_chars)
    } else {
        summary
    }
}
