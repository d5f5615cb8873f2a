//! OCR extraction for scanned PDFs
//!
//! Pages are rendered to PNG with `pdftoppm` (poppler-utils) and each page is
//! read with `tesseract`. Both binaries must be on `PATH`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use super::{ExtractionError, TextExtractor};

const PDFTOPPM: &str = "pdftoppm";
const TESSERACT: &str = "tesseract";

/// Page separator in the joined output (form feed, as `pdftotext` emits)
pub const PAGE_SEPARATOR: &str = "\x0c";

/// Extracts text from image-only PDFs with Tesseract
#[derive(Debug, Clone)]
pub struct OcrTextExtractor {
    /// Render resolution passed to pdftoppm
    pub dpi: u32,
    /// Tesseract language code(s), e.g. `eng` or `eng+deu`
    pub language: String,
    /// Parent directory for rendered page images
    pub scratch_dir: PathBuf,
}

impl OcrTextExtractor {
    pub fn new(dpi: u32, language: impl Into<String>) -> Self {
        Self {
            dpi,
            language: language.into(),
            scratch_dir: std::env::temp_dir(),
        }
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    async fn render_pages(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
        let prefix = out_dir.join("page");
        let output = Command::new(PDFTOPPM)
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(pdf)
            .arg(&prefix)
            .output()
            .await
            .map_err(|e| unavailable(PDFTOPPM, e))?;

        if !output.status.success() {
            return Err(ExtractionError::ToolFailed {
                tool: PDFTOPPM,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let mut pages = Vec::new();
        let mut entries = tokio::fs::read_dir(out_dir)
            .await
            .map_err(|e| ExtractionError::io(out_dir, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ExtractionError::io(out_dir, e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "png") {
                pages.push(path);
            }
        }
        // pdftoppm zero-pads page numbers, so lexical order is page order
        pages.sort();
        Ok(pages)
    }

    async fn recognize(&self, image: &Path) -> Result<String, ExtractionError> {
        let output = Command::new(TESSERACT)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .map_err(|e| unavailable(TESSERACT, e))?;

        if !output.status.success() {
            return Err(ExtractionError::ToolFailed {
                tool: TESSERACT,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for OcrTextExtractor {
    fn default() -> Self {
        Self::new(300, "eng")
    }
}

#[async_trait]
impl TextExtractor for OcrTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        tokio::fs::metadata(path)
            .await
            .map_err(|e| ExtractionError::io(path, e))?;

        let scratch = tempfile::Builder::new()
            .prefix("ocr-pages-")
            .tempdir_in(&self.scratch_dir)
            .map_err(|source| ExtractionError::ScratchDir {
                dir: self.scratch_dir.clone(),
                source,
            })?;
        let pages = self.render_pages(path, scratch.path()).await?;

        tracing::debug!(path = %path.display(), pages = pages.len(), dpi = self.dpi, "Running OCR");

        let mut texts = Vec::with_capacity(pages.len());
        for page in &pages {
            texts.push(self.recognize(page).await?);
        }

        let text = texts.join(PAGE_SEPARATOR);
        if text.trim().is_empty() {
            return Err(ExtractionError::NoText(path.to_path_buf()));
        }

        tracing::info!(path = %path.display(), pages = pages.len(), chars = text.len(), "OCR text extracted");
        Ok(text)
    }

    fn name(&self) -> &str {
        "ocr"
    }
}

fn unavailable(tool: &'static str, e: std::io::Error) -> ExtractionError {
    ExtractionError::ToolUnavailable {
        tool,
        reason: e.to_string(),
    }
}
