use crate::analysis::{AnalysisError, Analyzer};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub max_input_length: usize,
}

/// Form body posted to `/process`
#[derive(Debug, Default, Deserialize)]
pub struct ProcessForm {
    pub ingredients: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No valid text input provided")]
    Empty,

    #[error("Input exceeds maximum length of {max} characters.")]
    TooLong { max: usize },
}

impl ProcessForm {
    /// Validate the submitted text and hand it back unchanged
    pub fn validate(&self, max_length: usize) -> Result<&str, ValidationError> {
        let text = match self.ingredients.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(ValidationError::Empty),
        };
        if text.chars().count() > max_length {
            return Err(ValidationError::TooLong { max: max_length });
        }
        Ok(text)
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
