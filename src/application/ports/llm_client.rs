use async_trait::async_trait;

use crate::domain::ModelPrompt;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends the prompt and returns the generated text of the first candidate.
    async fn complete(&self, prompt: &ModelPrompt) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
