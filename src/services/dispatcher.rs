use serde::Serialize;
use std::sync::Arc;

use crate::services::generator::{GenerationConfig, GeneratorError, TextGenerator};

/// The two supported prompt languages. Anything that is not exactly `"es"`
/// is treated as English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("es") => Language::Spanish,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

/// Sampling is forced on whenever more than one sequence is requested.
pub fn effective_sampling(requested: bool, num_return_sequences: u32) -> bool {
    requested || num_return_sequences > 1
}

/// The English and Spanish generators, built once at startup and shared by
/// every request.
#[derive(Clone)]
pub struct Generators {
    english: Arc<dyn TextGenerator>,
    spanish: Arc<dyn TextGenerator>,
}

impl Generators {
    pub fn new(english: Arc<dyn TextGenerator>, spanish: Arc<dyn TextGenerator>) -> Self {
        Self { english, spanish }
    }

    pub fn select(&self, language: Language) -> &dyn TextGenerator {
        match language {
            Language::English => self.english.as_ref(),
            Language::Spanish => self.spanish.as_ref(),
        }
    }

    pub async fn dispatch(
        &self,
        language: Language,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Vec<String>, GeneratorError> {
        let generator = self.select(language);
        let config = GenerationConfig {
            do_sample: effective_sampling(config.do_sample, config.num_return_sequences),
            ..config.clone()
        };

        tracing::debug!(
            model = generator.model_id(),
            language = language.as_str(),
            num_return_sequences = config.num_return_sequences,
            do_sample = config.do_sample,
            "dispatching prompt"
        );

        generator.generate(prompt, &config).await
    }
}
