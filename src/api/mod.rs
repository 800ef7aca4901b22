pub mod models;
pub mod page;
pub mod process;

// Re-exports
pub use models::*;

use axum::{Json, extract::State};

pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.analyzer.model().to_string(),
    })
}
