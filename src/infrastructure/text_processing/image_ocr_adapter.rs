use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use image::ImageFormat;
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, FileFormat};

use super::run_blocking;

/// Recognizes text in PNG/JPEG uploads with the Tesseract command-line engine.
pub struct ImageOcrAdapter {
    command: String,
    language: String,
    timeout: Duration,
}

impl ImageOcrAdapter {
    pub fn new(command: impl Into<String>, language: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
            timeout,
        }
    }

    /// Decodes the upload and re-encodes it as a grayscale PNG for the engine.
    fn prepare_image(path: &Path) -> Result<NamedTempFile, FileLoaderError> {
        let img = image::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to decode image: {e}")))?;

        let prepared = tempfile::Builder::new()
            .prefix("dropout-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
            })?;

        img.to_luma8()
            .save_with_format(prepared.path(), ImageFormat::Png)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to write grayscale image: {e}"))
            })?;

        Ok(prepared)
    }

    async fn recognize(&self, image_path: &Path) -> Result<String, FileLoaderError> {
        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| FileLoaderError::ExtractionFailed("OCR timed out".to_string()))?
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to run OCR engine '{}': {e}",
                    self.command
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FileLoaderError::ExtractionFailed(format!(
                "OCR engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for ImageOcrAdapter {
    fn default() -> Self {
        Self::new("tesseract", "eng", Duration::from_secs(30))
    }
}

#[async_trait]
impl FileLoader for ImageOcrAdapter {
    #[tracing::instrument(skip(self, path), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != FileFormat::Image {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let source: PathBuf = path.to_path_buf();
        let prepared = run_blocking(self.timeout, "image", move || Self::prepare_image(&source))
            .await?;

        let text = self.recognize(prepared.path()).await?;

        tracing::info!(chars = text.len(), "OCR complete");
        Ok(text)
    }
}
