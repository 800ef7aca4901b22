use crate::api::models::AppState;
use crate::api::page::handlers::{index_handler, script_handler};
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/static/script.js", get(script_handler))
}
