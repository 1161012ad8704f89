use crate::processing::TierKind;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing summarization activity.
#[derive(Default)]
pub struct SummaryMetrics {
    documents_summarized: AtomicU64,
    abstractive_summaries: AtomicU64,
    extractive_summaries: AtomicU64,
    heuristic_summaries: AtomicU64,
}

impl SummaryMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a summarized document and the tier that produced it.
    pub fn record_summary(&self, tier: TierKind) {
        self.documents_summarized.fetch_add(1, Ordering::Relaxed);
        let counter = match tier {
            TierKind::Abstractive => &self.abstractive_summaries,
            TierKind::Extractive => &self.extractive_summaries,
            TierKind::Heuristic => &self.heuristic_summaries,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            documents_summarized: self.documents_summarized.load(Ordering::Relaxed),
            abstractive_summaries: self.abstractive_summaries.load(Ordering::Relaxed),
            extractive_summaries: self.extractive_summaries.load(Ordering::Relaxed),
            heuristic_summaries: self.heuristic_summaries.load(Ordering::Relaxed),
        }
    }
}

/// Immutable view of summarization counters used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Number of documents summarized since startup.
    pub documents_summarized: u64,
    /// Summaries produced by the abstractive tier.
    pub abstractive_summaries: u64,
    /// Summaries produced by the extractive tier.
    pub extractive_summaries: u64,
    /// Summaries produced by the heuristic fallback.
    pub heuristic_summaries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_documents_per_tier() {
        let metrics = SummaryMetrics::new();
        metrics.record_summary(TierKind::Extractive);
        metrics.record_summary(TierKind::Heuristic);
        metrics.record_summary(TierKind::Extractive);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.documents_summarized, 3);
        assert_eq!(snapshot.abstractive_summaries, 0);
        assert_eq!(snapshot.extractive_summaries, 2);
        assert_eq!(snapshot.heuristic_summaries, 1);
    }

    #[test]
    fn snapshot_serializes_as_json() {
        let metrics = SummaryMetrics::new();
        metrics.record_summary(TierKind::Abstractive);
        let json = serde_json::to_value(metrics.snapshot()).expect("json");
        assert_eq!(json["documents_summarized"], 1);
        assert_eq!(json["abstractive_summaries"], 1);
    }
}
