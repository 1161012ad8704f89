//! Fixed-size character chunking for model input.
//!
//! Chunks partition the source text: consecutive, non-overlapping, no gaps. Every chunk except
//! possibly the last holds exactly `size` characters (Unicode scalar values, never split). The
//! boundaries ignore sentence and word structure.

use super::types::ChunkingError;
use std::iter::FusedIterator;

/// Default chunk size, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Lazy iterator over fixed-size chunks of a borrowed string.
///
/// Clones walk the remaining text independently, so a clone taken before iteration replays the
/// full sequence.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    remaining: &'a str,
    size: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let end = self
            .remaining
            .char_indices()
            .nth(self.size)
            .map(|(offset, _)| offset)
            .unwrap_or(self.remaining.len());
        let (head, tail) = self.remaining.split_at(end);
        self.remaining = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining.is_empty() {
            return (0, Some(0));
        }
        // Each chunk holds between `size` bytes (ASCII) and `size` chars of up to 4 bytes.
        let bytes = self.remaining.len();
        let max_bytes_per_chunk = self.size.saturating_mul(4);
        (
            bytes.div_ceil(max_bytes_per_chunk).max(1),
            Some(bytes.div_ceil(self.size)),
        )
    }
}

impl FusedIterator for Chunks<'_> {}

/// Split `text` into consecutive chunks of at most `size` characters.
pub fn chunk_text(text: &str, size: usize) -> Result<Chunks<'_>, ChunkingError> {
    if size == 0 {
        return Err(ChunkingError::InvalidChunkSize);
    }
    Ok(Chunks {
        remaining: text,
        size,
    })
}
