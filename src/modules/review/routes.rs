use axum::{routing::post, Router};

use crate::modules::review::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(controller::summarize))
        .route("/generate", post(controller::generate))
        .route("/generate-positive", post(controller::generate_positive))
        .route("/generate-negative", post(controller::generate_negative))
        .route("/summarize-and-generate", post(controller::summarize_and_generate))
}
