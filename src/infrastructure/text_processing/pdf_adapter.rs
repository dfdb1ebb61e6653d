use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, FileFormat};

use super::run_blocking;

pub struct PdfAdapter {
    timeout: Duration,
}

impl PdfAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(path: &Path) -> Result<String, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        Self::join_pages((0..page_count).map(|page_index| doc.extract_text(page_index)))
    }

    /// Joins page texts with newlines, skipping pages with no text. A page
    /// that fails to parse fails the whole document.
    pub fn join_pages<I, E>(pages: I) -> Result<String, FileLoaderError>
    where
        I: IntoIterator<Item = Result<String, E>>,
        E: std::fmt::Display,
    {
        let mut text = String::new();
        for (page_index, page) in pages.into_iter().enumerate() {
            let page_text = page.map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }

        Ok(text.trim().to_string())
    }
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, path), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != FileFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let path: PathBuf = path.to_path_buf();
        let text = run_blocking(self.timeout, "PDF", move || Self::extract_pages(&path)).await?;

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
