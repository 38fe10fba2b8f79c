use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::services::generator::{GenerationConfig, GeneratorError, TextGenerator};

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationConfig,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    // summarization pipelines answer with `summary_text`
    #[serde(alias = "summary_text")]
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Sequences(Vec<GeneratedSequence>),
    Single(GeneratedSequence),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

/// Text generation backed by a hosted inference API
/// (`POST {base_url}/models/{model_id}`).
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    model_id: String,
}

impl InferenceClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_token: Option<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
            model_id: model_id.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_id)
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Vec<String>, GeneratorError> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: config,
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: false,
            },
        };

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(token) = &self.api_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .map(|e| e.error)
                .unwrap_or(error_text);
            if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
                return Err(GeneratorError::Unavailable(message));
            }
            return Err(GeneratorError::ApiError(message));
        }

        let body = response.text().await?;
        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        match parsed {
            InferenceResponse::Sequences(sequences) if sequences.is_empty() => Err(
                GeneratorError::InvalidResponse("No sequences in response".to_string()),
            ),
            InferenceResponse::Sequences(sequences) => {
                Ok(sequences.into_iter().map(|s| s.generated_text).collect())
            }
            InferenceResponse::Single(sequence) => Ok(vec![sequence.generated_text]),
            InferenceResponse::Error { error } => Err(GeneratorError::ApiError(error)),
        }
    }
}
