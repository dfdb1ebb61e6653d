use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dropout_catcher::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError,
};
use dropout_catcher::application::services::{AnalysisError, AnalysisService, ErrorKind};
use dropout_catcher::domain::{Document, ExtractedText, InputSource, ModelPrompt};
use dropout_catcher::infrastructure::text_processing::PlainTextAdapter;

/// Reads the temp file like a real adapter and remembers where it was.
#[derive(Default)]
struct RecordingFileLoader {
    seen_path: Mutex<Option<PathBuf>>,
    fail: bool,
}

#[async_trait::async_trait]
impl FileLoader for RecordingFileLoader {
    async fn extract_text(
        &self,
        path: &Path,
        _document: &Document,
    ) -> Result<String, FileLoaderError> {
        assert!(path.exists(), "temp file must exist during extraction");
        *self.seen_path.lock().unwrap() = Some(path.to_path_buf());
        if self.fail {
            return Err(FileLoaderError::ExtractionFailed("corrupt file".to_string()));
        }
        let data = std::fs::read(path).unwrap();
        Ok(String::from_utf8_lossy(&data).trim().to_string())
    }
}

struct ScriptedLlmClient {
    reply: Result<String, ()>,
    prompts: Mutex<Vec<ModelPrompt>>,
}

impl ScriptedLlmClient {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: Err(()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt_text(&self) -> String {
        self.prompts
            .lock()
            .unwrap()
            .last()
            .and_then(|p| p.text().map(String::from))
            .unwrap()
    }

    fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, prompt: &ModelPrompt) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply
            .clone()
            .map_err(|_| LlmClientError::ApiRequestFailed("connection refused".to_string()))
    }
}

const PREDICTION: &str = "```json\n{\"at_risk_students\": [\"Alice\"], \"risk_factors\": [], \"intervention_strategies\": [], \"success_probability\": 0.3}\n```";

fn service(
    loader: Arc<RecordingFileLoader>,
    llm: Arc<ScriptedLlmClient>,
) -> AnalysisService<RecordingFileLoader, ScriptedLlmClient> {
    AnalysisService::new(loader, llm, ExtractedText::MAX_CHARS)
}

fn file(name: &str, data: &[u8]) -> InputSource {
    InputSource::FileUpload {
        filename: name.to_string(),
        bytes: data.to_vec(),
    }
}

#[tokio::test]
async fn given_text_file_when_analyzing_then_returns_prediction_and_removes_temp_file() {
    let loader = Arc::new(RecordingFileLoader::default());
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = service(Arc::clone(&loader), Arc::clone(&llm));

    let result = service.analyze(file("a.txt", b"hello")).await.unwrap();

    assert_eq!(result.at_risk_count(), Some(1));
    assert!(llm.last_prompt_text().ends_with("Student Input:\nhello"));
    let temp_path = loader.seen_path.lock().unwrap().clone().unwrap();
    assert!(!temp_path.exists());
    assert_eq!(temp_path.extension().and_then(|e| e.to_str()), Some("txt"));
}

#[tokio::test]
async fn given_extraction_failure_when_analyzing_then_generic_failure_and_temp_file_removed() {
    let loader = Arc::new(RecordingFileLoader {
        fail: true,
        ..Default::default()
    });
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = service(Arc::clone(&loader), Arc::clone(&llm));

    let err = service.analyze(file("a.pdf", b"%PDF-broken")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GenericFailure);
    assert_eq!(err.to_string(), "extraction failed: corrupt file");
    let temp_path = loader.seen_path.lock().unwrap().clone().unwrap();
    assert!(!temp_path.exists());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_unsupported_extension_when_analyzing_then_rejects_before_extraction() {
    let loader = Arc::new(RecordingFileLoader::default());
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = service(Arc::clone(&loader), Arc::clone(&llm));

    let err = service.analyze(file("a.gif", b"GIF89a")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    assert_eq!(err.to_string(), "Unsupported file format");
    assert!(loader.seen_path.lock().unwrap().is_none());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_empty_raw_body_when_analyzing_then_empty_input() {
    let service = service(
        Arc::new(RecordingFileLoader::default()),
        Arc::new(ScriptedLlmClient::replying(PREDICTION)),
    );

    let err = service
        .analyze(InputSource::RawBody { bytes: b"  \n ".to_vec() })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert_eq!(err.to_string(), "No input provided");
}

#[tokio::test]
async fn given_empty_file_when_analyzing_then_empty_input() {
    let service = service(
        Arc::new(RecordingFileLoader::default()),
        Arc::new(ScriptedLlmClient::replying(PREDICTION)),
    );

    let err = service.analyze(file("blank.txt", b"   ")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}

#[tokio::test]
async fn given_long_json_text_when_analyzing_then_prompt_carries_first_ten_thousand_chars() {
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = service(Arc::new(RecordingFileLoader::default()), Arc::clone(&llm));
    let text = format!("{}{}", "x".repeat(10_000), "TAIL");

    service
        .analyze(InputSource::JsonBody { text })
        .await
        .unwrap();

    let prompt = llm.last_prompt_text();
    let (_, record) = prompt.split_once("Student Input:\n").unwrap();
    assert_eq!(record.chars().count(), 10_000);
    assert!(!record.contains("TAIL"));
}

#[tokio::test]
async fn given_raw_body_with_padding_when_analyzing_then_trims_before_prompting() {
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = service(Arc::new(RecordingFileLoader::default()), Arc::clone(&llm));

    service
        .analyze(InputSource::RawBody {
            bytes: b"\n  Carol missed 12 classes  \n".to_vec(),
        })
        .await
        .unwrap();

    assert!(llm.last_prompt_text().ends_with("Student Input:\nCarol missed 12 classes"));
}

#[tokio::test]
async fn given_invalid_utf8_raw_body_when_analyzing_then_generic_failure() {
    let service = service(
        Arc::new(RecordingFileLoader::default()),
        Arc::new(ScriptedLlmClient::replying(PREDICTION)),
    );

    let err = service
        .analyze(InputSource::RawBody {
            bytes: vec![0xFF, 0xFE, 0x41],
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GenericFailure);
}

#[tokio::test]
async fn given_non_json_model_reply_when_analyzing_then_remote_decode_error() {
    let service = service(
        Arc::new(RecordingFileLoader::default()),
        Arc::new(ScriptedLlmClient::replying("not json")),
    );

    let err = service
        .analyze(InputSource::JsonBody {
            text: "record".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteDecodeError);
    assert_eq!(err.to_string(), "Invalid JSON received from API");
}

#[tokio::test]
async fn given_provider_failure_when_analyzing_then_generic_failure_with_detail() {
    let service = service(
        Arc::new(RecordingFileLoader::default()),
        Arc::new(ScriptedLlmClient::failing()),
    );

    let err = service
        .analyze(InputSource::JsonBody {
            text: "record".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GenericFailure);
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn given_real_plain_text_adapter_when_analyzing_log_file_then_drops_invalid_bytes() {
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = AnalysisService::new(
        Arc::new(PlainTextAdapter),
        Arc::clone(&llm),
        ExtractedText::MAX_CHARS,
    );

    service
        .analyze(InputSource::FileUpload {
            filename: "ATTENDANCE.LOG".to_string(),
            bytes: b"Dan\xFF absent".to_vec(),
        })
        .await
        .unwrap();

    assert!(llm.last_prompt_text().ends_with("Student Input:\nDan absent"));
}

struct RejectingFileLoader;

#[async_trait::async_trait]
impl FileLoader for RejectingFileLoader {
    async fn extract_text(
        &self,
        _path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::UnsupportedFormat(
            document.format.as_str().to_string(),
        ))
    }
}

#[tokio::test]
async fn given_loader_without_adapter_for_format_when_analyzing_then_reports_unsupported_format() {
    let llm = Arc::new(ScriptedLlmClient::replying(PREDICTION));
    let service = AnalysisService::new(
        Arc::new(RejectingFileLoader),
        Arc::clone(&llm),
        ExtractedText::MAX_CHARS,
    );

    let err = service.analyze(file("record.pdf", b"%PDF-1.4")).await.unwrap_err();

    assert!(matches!(err, AnalysisError::UnsupportedFormat(ref name) if name == "record.pdf"));
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    assert_eq!(err.to_string(), "Unsupported file format");
    assert_eq!(llm.call_count(), 0);
}
