use serde::Serialize;

use crate::services::dispatcher::Language;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub device: String,
    pub models_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub language: Language,
    pub id: String,
    pub name: String,
    pub size: String,
    pub description: String,
}
