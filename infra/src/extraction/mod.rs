//! PDF text extraction
//!
//! Two strategies behind one [`TextExtractor`] seam:
//! - [`PdfTextExtractor`] reads the embedded text layer with `pdf-extract`
//! - [`OcrTextExtractor`] renders pages with `pdftoppm` and reads them with `tesseract`
//!
//! Callers that only want "text or nothing" use [`TextExtractor::extract_or_none`].

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod ocr;
pub mod pdf_text;

pub use ocr::OcrTextExtractor;
pub use pdf_text::PdfTextExtractor;

/// Extraction failures
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create scratch directory under {dir}: {source}")]
    ScratchDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a PDF file: {0}")]
    NotPdf(PathBuf),

    #[error("PDF file too large: {size} bytes (max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("PDF parsing failed: {0}")]
    Parse(String),

    #[error("Extraction task aborted: {0}")]
    Panicked(String),

    #[error("{tool} is not available: {reason}")]
    ToolUnavailable { tool: &'static str, reason: String },

    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: &'static str, stderr: String },

    #[error("No text could be extracted from {0}")]
    NoText(PathBuf),
}

impl ExtractionError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Turns a file on disk into plain text
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract all text from the file at `path`
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;

    /// Name used in logs
    fn name(&self) -> &str;

    /// Extract text, logging any failure and returning `None` in its place
    async fn extract_or_none(&self, path: &Path) -> Option<String> {
        match self.extract(path).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(
                    extractor = self.name(),
                    path = %path.display(),
                    error = %e,
                    "Text extraction failed"
                );
                None
            }
        }
    }
}
