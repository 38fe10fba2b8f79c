use reqwest::Client;
use std::env;
use std::sync::Arc;

use crate::services::dispatcher::Generators;
use crate::services::inference::InferenceClient;

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub english_model: String,
    pub spanish_model: String,
}

impl ModelSettings {
    pub fn from_env() -> Self {
        let base_url = env::var("INFERENCE_BASE_URL")
            .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string());
        let api_token = env::var("INFERENCE_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        let english_model =
            env::var("EN_MODEL").unwrap_or_else(|_| "google/flan-t5-base".to_string());
        let spanish_model =
            env::var("ES_MODEL").unwrap_or_else(|_| "google/mt5-base".to_string());

        Self {
            base_url,
            api_token,
            english_model,
            spanish_model,
        }
    }

    /// Builds both generators over one pooled HTTP client.
    pub fn connect(&self) -> Generators {
        let client = Client::new();

        let english = InferenceClient::new(
            client.clone(),
            self.base_url.clone(),
            self.api_token.clone(),
            self.english_model.clone(),
        );
        let spanish = InferenceClient::new(
            client,
            self.base_url.clone(),
            self.api_token.clone(),
            self.spanish_model.clone(),
        );

        Generators::new(Arc::new(english), Arc::new(spanish))
    }
}
