use crate::api::models::AppState;
use crate::api::process::handlers::process_handler;
use axum::{Router, routing::post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/process", post(process_handler))
}
