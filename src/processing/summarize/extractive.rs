//! Frequency-scored sentence selection.
//!
//! Sentences come from UAX #29 segmentation. Each content token (not a stop-word, numeral,
//! punctuation, or whitespace) contributes its lemma to a document-wide frequency table,
//! normalized by the top count. A sentence scores the mean normalized frequency of its content
//! tokens; the best [`EXTRACTIVE_SENTENCES`] are emitted in document order.

use super::lexicon::{is_numeral, is_stop_word, lemmatize};
use crate::processing::truncate::truncate_to_boundary;
use crate::processing::types::TierError;
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Maximum number of sentences kept by the extractive tier.
pub const EXTRACTIVE_SENTENCES: usize = 5;

/// Select the highest-scoring sentences of `text`, capped at `max_chars`.
///
/// Blank input yields an empty summary.
pub fn summarize_extractive(text: &str, max_chars: usize) -> Result<String, TierError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    let sentences: Vec<&str> = text
        .unicode_sentences()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();
    if sentences.is_empty() {
        return Err(TierError::NoSentences);
    }

    let lemmas: Vec<Vec<String>> = sentences
        .iter()
        .map(|sentence| content_lemmas(sentence))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for lemma in lemmas.iter().flatten() {
        *counts.entry(lemma.as_str()).or_insert(0) += 1;
    }
    let Some(&top) = counts.values().max() else {
        return Err(TierError::NoScoreableTokens);
    };

    let scores: Vec<f64> = lemmas
        .iter()
        .map(|tokens| {
            if tokens.is_empty() {
                return 0.0;
            }
            let total: f64 = tokens
                .iter()
                .map(|lemma| counts.get(lemma.as_str()).copied().unwrap_or(0) as f64 / top as f64)
                .sum();
            total / tokens.len() as f64
        })
        .collect();

    let selected = select_top(&scores, EXTRACTIVE_SENTENCES);
    tracing::debug!(
        sentences = sentences.len(),
        vocabulary = counts.len(),
        selected = ?selected,
        "Scored sentences for extractive summary"
    );

    let summary = selected
        .iter()
        .map(|&index| sentences[index])
        .collect::<Vec<_>>()
        .join(" ");
    Ok(truncate_to_boundary(&summary, max_chars))
}

/// Lemmas of the content tokens in a sentence, in order.
fn content_lemmas(sentence: &str) -> Vec<String> {
    sentence
        .unicode_words()
        .map(str::to_lowercase)
        .filter(|word| !is_stop_word(word) && !is_numeral(word))
        .map(|word| lemmatize(&word))
        .filter(|lemma| !lemma.is_empty())
        .collect()
}

/// Indices of the `limit` best scores, returned in ascending document order.
///
/// Equal scores rank by earlier position.
fn select_top(scores: &[f64], limit: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked.sort_unstable();
    ranked
}
