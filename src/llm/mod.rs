//! Chat-completion client abstraction

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while talking to a completion provider
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Timeout waiting for response")]
    Timeout,

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode provider reply: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No response choices returned from provider")]
    NoChoices,

    #[error("Client error: {0}")]
    Client(String),
}

impl LlmError {
    /// Whether the failure came from the provider side of the call
    pub fn is_provider_error(&self) -> bool {
        !matches!(self, LlmError::Client(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A two-message conversation: system instruction plus user prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: Role::System,
                content: self.system.clone(),
            },
            ChatMessage {
                role: Role::User,
                content: self.prompt.clone(),
            },
        ]
    }
}

/// Anything that can turn a conversation into reply text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Send the conversation and return the first choice's text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_system_then_user() {
        let request = CompletionRequest::new("be brief", "sugar");
        let json = serde_json::to_value(request.messages()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "sugar"}
            ])
        );
    }

    #[test]
    fn only_client_errors_are_local() {
        assert!(LlmError::NoChoices.is_provider_error());
        assert!(LlmError::Timeout.is_provider_error());
        assert!(!LlmError::Client("bad header".into()).is_provider_error());
    }
}
