use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::{GeminiClient, MockLlmClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: the Gemini provider requires llm.api_key")]
    MissingApiKey,
    #[error("client initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        match settings.provider {
            LlmProvider::Gemini => {
                if settings.api_key.is_empty() {
                    return Err(LlmClientFactoryError::MissingApiKey);
                }
                tracing::info!(model = %settings.model, "Using Gemini provider");
                let client = GeminiClient::new(
                    &settings.base_url,
                    &settings.model,
                    SecretString::from(settings.api_key.clone()),
                    Duration::from_secs(settings.timeout_secs),
                )
                .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            LlmProvider::Mock => {
                tracing::warn!("Using mock LLM provider; predictions are canned");
                Ok(Arc::new(MockLlmClient))
            }
        }
    }
}
