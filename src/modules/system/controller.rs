use axum::{extract::State, Json};

use crate::modules::system::schema::{HealthResponse, ModelInfo, ModelsResponse};
use crate::services::dispatcher::Language;
use crate::AppState;

fn approximate_size(model_name: &str) -> &'static str {
    match model_name {
        "flan-t5-small" => "~80M parameters",
        "flan-t5-base" => "~250M parameters",
        "flan-t5-large" => "~780M parameters",
        "mt5-small" => "~300M parameters",
        "mt5-base" => "~580M parameters",
        "mt5-large" => "~1.2B parameters",
        "bart-large-cnn" => "~400M parameters",
        _ => "unknown",
    }
}

fn describe(language: Language) -> &'static str {
    match language {
        Language::English => "English text-to-text model used for summaries and English reviews.",
        Language::Spanish => "Multilingual text-to-text model used for Spanish reviews.",
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        device: state.device.clone(),
        // generators are built before the server binds
        models_loaded: true,
    })
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = [Language::English, Language::Spanish]
        .into_iter()
        .map(|language| {
            let generator = state.generators.select(language);
            ModelInfo {
                language,
                id: generator.model_id().to_string(),
                name: generator.model_name().to_string(),
                size: approximate_size(generator.model_name()).to_string(),
                description: describe(language).to_string(),
            }
        })
        .collect();

    Json(ModelsResponse { models })
}
