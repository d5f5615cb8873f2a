//! Text layer extraction via `pdf-extract`

use async_trait::async_trait;
use std::path::Path;

use super::{ExtractionError, TextExtractor};

/// PDF magic bytes
const PDF_MAGIC: &[u8] = b"%PDF";

/// Default maximum PDF file size (100 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads the embedded text layer of a PDF
///
/// Scanned documents have no text layer and come back as
/// [`ExtractionError::NoText`]; use [`super::OcrTextExtractor`] for those.
#[derive(Debug, Clone)]
pub struct PdfTextExtractor {
    max_file_size: u64,
}

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Reject oversized files from their metadata, before any bytes are read
    async fn check_size(&self, path: &Path) -> Result<u64, ExtractionError> {
        let size = tokio::fs::metadata(path)
            .await
            .map_err(|e| ExtractionError::io(path, e))?
            .len();
        if size > self.max_file_size {
            return Err(ExtractionError::TooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(size)
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        self.check_size(path).await?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::io(path, e))?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ExtractionError::NotPdf(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), size = bytes.len(), "Extracting PDF text layer");

        // pdf-extract can panic on malformed input; the blocking task contains it.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| ExtractionError::Panicked(e.to_string()))?
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractionError::NoText(path.to_path_buf()));
        }

        tracing::info!(path = %path.display(), chars = text.len(), "PDF text extracted");
        Ok(text)
    }

    fn name(&self) -> &str {
        "pdf-text"
    }
}
