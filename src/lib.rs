//! Ingredient harm checker: a small web form backed by a chat-completion API

pub mod analysis;
pub mod api;
pub mod config;
pub mod llm;

use crate::api::{AppState, health_handler};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the application router with all routes attached
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::page::routes())
        .merge(api::process::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
