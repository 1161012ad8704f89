//! Document processing pipeline: normalization, chunking, and tiered summarization.

pub mod chunking;
pub mod normalize;
mod service;
pub mod summarize;
pub mod truncate;
pub mod types;

pub use service::NarrationService;
pub use summarize::{AbstractiveTier, ExtractiveTier, HeuristicTier, Summarizer, SummaryTier};
pub use types::{ChunkingError, PipelineError, SummaryOptions, TierError, TierKind};
