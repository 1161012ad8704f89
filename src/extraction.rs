//! Raw text extraction for supported document formats.
//!
//! PDF pages are extracted with `pdf-extract`; plain text is decoded leniently. Extraction is
//! blocking work and callers on an async runtime should move it onto a blocking thread.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while pulling raw text out of a source document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// File extension is not one of the supported formats.
    #[error("unsupported document format: {0} (allowed: .pdf, .txt)")]
    UnsupportedFormat(String),
    /// Source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// PDF parser rejected the document.
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    /// Blocking extraction task did not complete.
    #[error("extraction task failed: {0}")]
    Worker(String),
}

/// Document formats accepted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// UTF-8 plain text.
    Text,
}

impl DocumentFormat {
    /// Detect the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let extension = path
            .extension()
            .and_then(|value| value.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" => Ok(Self::Text),
            _ => Err(ExtractionError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Extract raw text from an in-memory document.
///
/// Returns an empty string when the document holds no extractable text.
pub fn extract_text(data: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => {
            let text = pdf_extract::extract_text_from_mem(data)
                .map_err(|error| ExtractionError::Pdf(error.to_string()))?;
            // pdf-extract separates pages with form feeds.
            Ok(text.replace('\x0C', "\n"))
        }
        DocumentFormat::Text => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}

/// Read a document from disk and extract its raw text.
pub fn extract_text_from_file(path: &Path) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_path(path)?;
    let data = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = extract_text(&data, format)?;
    tracing::debug!(
        path = %path.display(),
        format = ?format,
        bytes = data.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );
    Ok(text)
}
