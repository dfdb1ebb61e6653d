use serde::{Deserialize, Serialize};

/// Request envelope in the provider's role + parts shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrompt {
    pub contents: Vec<PromptContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptContent {
    pub role: String,
    pub parts: Vec<PromptPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPart {
    pub text: String,
}

impl ModelPrompt {
    pub fn user(text: String) -> Self {
        Self {
            contents: vec![PromptContent {
                role: "user".to_string(),
                parts: vec![PromptPart { text }],
            }],
        }
    }

    /// Text of the first part of the first content entry.
    pub fn text(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
    }
}
