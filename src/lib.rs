use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::dispatcher::Generators;

pub mod config;
pub mod error;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub generators: Arc<Generators>,
    pub device: String,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(modules::system::routes::routes())
        .merge(modules::review::routes::routes())
        .merge(modules::catalog::routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
