#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::{Arc, Mutex};

use review_text_service::services::dispatcher::Generators;
use review_text_service::services::generator::{GenerationConfig, GeneratorError, TextGenerator};
use review_text_service::{app, AppState};

#[derive(Debug, Clone)]
pub struct Call {
    pub prompt: String,
    pub config: GenerationConfig,
}

/// Stub generator that records every call and answers with numbered outputs.
pub struct RecordingGenerator {
    model_id: &'static str,
    failure: Option<&'static str>,
    /// Caps the number of outputs regardless of the requested count.
    limit: Option<u32>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingGenerator {
    pub fn new(model_id: &'static str) -> Arc<Self> {
        Arc::new(Self {
            model_id,
            failure: None,
            limit: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(model_id: &'static str, message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            model_id,
            failure: Some(message),
            limit: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn short(model_id: &'static str, limit: u32) -> Arc<Self> {
        Arc::new(Self {
            model_id,
            failure: None,
            limit: Some(limit),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn output(&self, index: u32) -> String {
        format!("{} output {}", self.model_id, index)
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    fn model_id(&self) -> &str {
        self.model_id
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Vec<String>, GeneratorError> {
        self.calls.lock().unwrap().push(Call {
            prompt: prompt.to_string(),
            config: config.clone(),
        });

        if let Some(message) = self.failure {
            return Err(GeneratorError::ApiError(message.to_string()));
        }

        let count = self
            .limit
            .map_or(config.num_return_sequences, |limit| limit.min(config.num_return_sequences));

        Ok((0..count)
            .map(|i| self.output(i))
            .collect())
    }
}

pub struct TestContext {
    pub server: TestServer,
    pub english: Arc<RecordingGenerator>,
    pub spanish: Arc<RecordingGenerator>,
}

pub fn setup_with(
    english: Arc<RecordingGenerator>,
    spanish: Arc<RecordingGenerator>,
) -> TestContext {
    let state = AppState {
        generators: Arc::new(Generators::new(english.clone(), spanish.clone())),
        device: "cpu".to_string(),
    };

    TestContext {
        server: TestServer::new(app(state)).unwrap(),
        english,
        spanish,
    }
}

pub fn setup_test_server() -> TestContext {
    setup_with(
        RecordingGenerator::new("google/flan-t5-base"),
        RecordingGenerator::new("google/mt5-base"),
    )
}
