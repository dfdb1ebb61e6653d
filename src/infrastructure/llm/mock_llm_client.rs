use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ModelPrompt;

const CANNED_PREDICTION: &str = r#"```json
{
  "at_risk_students": [],
  "risk_factors": ["Mock provider: no model was consulted"],
  "intervention_strategies": ["Configure llm.provider = \"gemini\" with an API key"],
  "success_probability": 0.5
}
```"#;

/// Offline stand-in for the provider; answers every prompt with the same
/// fenced prediction.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &ModelPrompt) -> Result<String, LlmClientError> {
        tracing::debug!(
            prompt_chars = prompt.text().map(str::len).unwrap_or(0),
            "Mock provider answering"
        );
        Ok(CANNED_PREDICTION.to_string())
    }
}
