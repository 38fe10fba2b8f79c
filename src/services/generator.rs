use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Model unavailable: {0}")]
    Unavailable(String),
}

impl GeneratorError {
    /// The underlying message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            GeneratorError::RequestError(e) => e.to_string(),
            GeneratorError::ApiError(message)
            | GeneratorError::InvalidResponse(message)
            | GeneratorError::Unavailable(message) => message.clone(),
        }
    }
}

/// Parameters forwarded verbatim to the text-generation capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub max_length: u32,
    pub min_length: u32,
    pub num_return_sequences: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub top_p: f32,
    pub repetition_penalty: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 40,
            num_return_sequences: 1,
            temperature: 1.0,
            do_sample: false,
            top_p: 1.0,
            repetition_penalty: 1.0,
        }
    }
}

/// A black-box text-generation capability: prompt in, one text per requested
/// sequence out. Implementations are shared across requests and must not hold
/// per-request state.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Full model identifier, e.g. `google/mt5-base`.
    fn model_id(&self) -> &str;

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Vec<String>, GeneratorError>;

    /// Short name reported to callers (`mt5-base` for `google/mt5-base`).
    fn model_name(&self) -> &str {
        let id = self.model_id();
        id.rsplit('/').next().unwrap_or(id)
    }
}
