use axum::{routing::get, Router};

use crate::modules::catalog::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/reviews", get(controller::list_reviews))
}
