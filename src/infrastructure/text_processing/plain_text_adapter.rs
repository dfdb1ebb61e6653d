use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, FileFormat};

pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Decodes UTF-8, dropping invalid byte sequences instead of replacing them.
    pub fn decode_dropping_invalid(data: &[u8]) -> String {
        data.utf8_chunks().map(|chunk| chunk.valid()).collect()
    }
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != FileFormat::PlainText {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read file: {e}")))?;

        Ok(Self::decode_dropping_invalid(&data).trim().to_string())
    }
}
