use crate::api::models::*;
use axum::{Json, extract::State};
use tracing::info;

pub async fn process_handler(
    State(state): State<AppState>,
    form: ProcessForm,
) -> Result<Json<String>, AppError> {
    // Validate
    let text = form.validate(state.max_input_length)?;

    info!(chars = text.chars().count(), "Analyzing ingredients");

    // Analyze
    let html = state.analyzer.analyze(text).await?;

    Ok(Json(html))
}
