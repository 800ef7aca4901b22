//! Ingredient analysis pipeline: sanitize, prompt, complete, parse, render

pub mod finding;
pub mod parser;
pub mod prompt;
pub mod render;

pub use finding::{ColorCode, IngredientFinding};
pub use parser::parse_findings;
pub use prompt::{SYSTEM_PROMPT, build_prompt, sanitize};
pub use render::{NO_FINDINGS, render_findings};

use crate::llm::{CompletionClient, CompletionRequest, LlmError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Pipeline failures; `Display` is the message shown to the caller
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("An error occurred while communicating with the OpenAI API.")]
    Upstream(#[source] LlmError),

    #[error("An unexpected error occurred while analyzing ingredients.")]
    Unexpected(#[source] LlmError),

    #[error("Invalid response format")]
    Format,

    #[error("Response is not in the expected format.")]
    NotAnArray,

    #[error("Failed to decode API response as JSON.")]
    Decode(#[source] serde_json::Error),

    #[error("An unexpected error occurred while formatting the response.")]
    Record(#[source] serde_json::Error),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        if err.is_provider_error() {
            AnalysisError::Upstream(err)
        } else {
            AnalysisError::Unexpected(err)
        }
    }
}

impl AnalysisError {
    /// Underlying cause, for logs only
    fn detail(&self) -> String {
        match self {
            AnalysisError::Upstream(e) | AnalysisError::Unexpected(e) => e.to_string(),
            AnalysisError::Decode(e) | AnalysisError::Record(e) => e.to_string(),
            AnalysisError::Format | AnalysisError::NotAnArray => self.to_string(),
        }
    }
}

/// Runs one ingredient list through the completion client
#[derive(Clone)]
pub struct Analyzer {
    client: Arc<dyn CompletionClient>,
}

impl Analyzer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Analyze validated input and return the HTML fragment
    pub async fn analyze(&self, text: &str) -> Result<String, AnalysisError> {
        let result = self.run(text).await;
        if let Err(e) = &result {
            error!(error = %e, detail = %e.detail(), "Ingredient analysis failed");
        }
        result
    }

    async fn run(&self, text: &str) -> Result<String, AnalysisError> {
        let sanitized = sanitize(text);
        let request = CompletionRequest::new(SYSTEM_PROMPT, build_prompt(&sanitized));

        info!(
            model = self.client.model(),
            input_chars = sanitized.chars().count(),
            "Requesting ingredient analysis"
        );

        let reply = self.client.complete(&request).await?;
        debug!(reply = %reply, "Completion reply");

        let findings = parse_findings(&reply)?;
        info!(findings = findings.len(), "Parsed findings");
        for finding in &findings {
            debug!(
                name = %finding.name,
                color_code = ?finding.color_code,
                is_harmful = ?finding.is_harmful,
                category = ?finding.category,
                can_cause = ?finding.can_cause,
                "Finding"
            );
        }

        Ok(render_findings(&findings))
    }
}
