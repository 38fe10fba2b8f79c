use axum::{routing::get, Router};

use crate::modules::system::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(controller::health))
        .route("/models", get(controller::list_models))
}
