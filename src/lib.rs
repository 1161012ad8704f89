#![deny(missing_docs)]

//! Core library for Narrata: documents in, bounded narration summaries out.

/// Environment-driven configuration management.
pub mod config;
/// Text extraction from PDF and plain-text documents.
pub mod extraction;
/// Structured logging and tracing setup.
pub mod logging;
/// Summarization metrics helpers.
pub mod metrics;
/// Document processing pipeline: normalization, chunking, and tiered summaries.
pub mod processing;
/// Model provider abstraction and adapters.
pub mod summarization;
