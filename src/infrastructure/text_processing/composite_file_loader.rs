use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, FileFormat};

use super::{DocxAdapter, ImageOcrAdapter, PdfAdapter, PlainTextAdapter};

pub struct CompositeFileLoader {
    adapters: HashMap<FileFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(FileFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// One adapter per supported format.
    pub fn with_default_adapters(
        timeout: Duration,
        ocr_command: &str,
        ocr_language: &str,
    ) -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new(timeout));
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new(timeout));
        let image: Arc<dyn FileLoader> =
            Arc::new(ImageOcrAdapter::new(ocr_command, ocr_language, timeout));
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (FileFormat::Pdf, pdf),
            (FileFormat::Docx, docx),
            (FileFormat::Image, image),
            (FileFormat::PlainText, text),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            FileLoaderError::UnsupportedFormat(document.format.as_str().to_string())
        })?;

        adapter.extract_text(path, document).await
    }
}
