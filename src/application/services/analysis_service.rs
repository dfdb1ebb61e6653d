use std::io::Write;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{Document, ExtractedText, FileFormat, InputSource, PredictionResult};
use crate::infrastructure::observability::redact_for_log;

use super::prompt_builder::build_dropout_prompt;
use super::response_sanitizer::sanitize_model_output;

/// Runs one request through extraction, prompting and response parsing.
pub struct AnalysisService<F: ?Sized, L: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    max_chars: usize,
}

impl<F: ?Sized, L: ?Sized> AnalysisService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>, max_chars: usize) -> Self {
        Self {
            file_loader,
            llm_client,
            max_chars,
        }
    }

    #[tracing::instrument(skip(self, input), fields(input = input.kind()))]
    pub async fn analyze(&self, input: InputSource) -> Result<PredictionResult, AnalysisError> {
        let raw_text = self.extract(input).await?;
        let text = ExtractedText::new(raw_text, self.max_chars).ok_or(AnalysisError::EmptyInput)?;

        tracing::debug!(
            chars = text.char_count(),
            preview = %redact_for_log(text.as_str()),
            "Input text ready"
        );

        let prompt = build_dropout_prompt(&text);
        let raw_response = self.llm_client.complete(&prompt).await?;

        tracing::debug!(response = %redact_for_log(&raw_response), "Model responded");

        let prediction =
            sanitize_model_output(&raw_response).map_err(AnalysisError::InvalidModelJson)?;

        tracing::info!(
            at_risk = prediction.at_risk_count(),
            success_probability = prediction.success_probability(),
            "Prediction parsed"
        );

        Ok(prediction)
    }

    async fn extract(&self, input: InputSource) -> Result<String, AnalysisError> {
        match input {
            InputSource::FileUpload { filename, bytes } => {
                self.extract_file(filename, &bytes).await
            }
            InputSource::JsonBody { text } => Ok(text),
            InputSource::RawBody { bytes } => String::from_utf8(bytes)
                .map(|s| s.trim().to_string())
                .map_err(|e| AnalysisError::InvalidBody(e.to_string())),
        }
    }

    async fn extract_file(&self, filename: String, bytes: &[u8]) -> Result<String, AnalysisError> {
        let format = FileFormat::from_filename(&filename).ok_or_else(|| {
            tracing::warn!(filename = %filename, "Unsupported upload extension");
            AnalysisError::UnsupportedFormat(filename.clone())
        })?;
        let document = Document::new(filename, format, bytes.len() as u64);

        // Removed on drop, whichever way extraction ends.
        let mut temp_file = tempfile::Builder::new()
            .prefix("dropout-upload-")
            .suffix(&document.suffix())
            .tempfile()
            .map_err(AnalysisError::TempFile)?;
        temp_file.write_all(bytes).map_err(AnalysisError::TempFile)?;
        temp_file.flush().map_err(AnalysisError::TempFile)?;

        tracing::debug!(
            filename = %document.filename,
            format = format.as_str(),
            bytes = document.size_bytes,
            "Extracting uploaded file"
        );

        self.file_loader
            .extract_text(temp_file.path(), &document)
            .await
            .map_err(|e| match e {
                FileLoaderError::UnsupportedFormat(_) => {
                    AnalysisError::UnsupportedFormat(document.filename.clone())
                }
                other => AnalysisError::Extraction(other),
            })
    }
}

/// Failure category, mapped one-to-one onto the HTTP error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    EmptyInput,
    RemoteDecodeError,
    GenericFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unsupported file format")]
    UnsupportedFormat(String),
    #[error("No input provided")]
    EmptyInput,
    #[error("Invalid JSON received from API")]
    InvalidModelJson(#[source] serde_json::Error),
    #[error("request body is not valid UTF-8: {0}")]
    InvalidBody(String),
    #[error("temp file: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("{0}")]
    Extraction(#[from] FileLoaderError),
    #[error("{0}")]
    Completion(#[from] LlmClientError),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvalidModelJson(_) => ErrorKind::RemoteDecodeError,
            Self::InvalidBody(_) | Self::TempFile(_) | Self::Extraction(_) | Self::Completion(_) => {
                ErrorKind::GenericFailure
            }
        }
    }
}
