//! Declarative description of every generation endpoint.
//!
//! Each handler picks one [`Endpoint`] record and hands it the caller's input;
//! [`Endpoint::run`] does the rest: prompt, parameters, dispatch and failure
//! shaping. Behaviour differences between endpoints live only in these records.

use tracing::Instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::dispatcher::{Generators, Language};
use crate::services::generator::{GenerationConfig, GeneratorError};
use crate::services::prompt::{build_prompt, PromptInput, PromptKind};

pub const MAX_SEQUENCES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePolicy {
    Single,
    /// Caller-chosen count clamped to `1..=max`.
    Requested { max: u32 },
}

/// The endpoint's own sampling flag. More than one sequence always samples
/// regardless of this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPolicy {
    Off,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Propagate,
    Wrap { prefix: &'static str },
}

impl FailurePolicy {
    fn apply(self, error: GeneratorError) -> ApiError {
        match self {
            FailurePolicy::Propagate => ApiError::Unhandled(error),
            FailurePolicy::Wrap { prefix } => {
                ApiError::Service(format!("{}: {}", prefix, error.message()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub max_length: u32,
    pub min_length: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
}

/// Per-request values that replace an endpoint's defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub max_length: Option<u32>,
    pub min_length: Option<u32>,
    pub temperature: Option<f32>,
    pub sequences: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub name: &'static str,
    pub kind: PromptKind,
    pub sequences: SequencePolicy,
    pub sampling: SamplingPolicy,
    pub failure: FailurePolicy,
    pub defaults: Defaults,
}

const SUMMARY_DEFAULTS: Defaults = Defaults {
    max_length: 150,
    min_length: 40,
    temperature: 1.0,
    top_p: 1.0,
    repetition_penalty: 1.0,
};

const SENTIMENT_DEFAULTS: Defaults = Defaults {
    max_length: 150,
    min_length: 30,
    temperature: 0.7,
    top_p: 0.9,
    repetition_penalty: 1.2,
};

pub const SUMMARIZE: Endpoint = Endpoint {
    name: "summarize",
    kind: PromptKind::Summarize,
    sequences: SequencePolicy::Single,
    sampling: SamplingPolicy::Off,
    failure: FailurePolicy::Propagate,
    defaults: SUMMARY_DEFAULTS,
};

pub const GENERATE: Endpoint = Endpoint {
    name: "generate",
    kind: PromptKind::GenerateFromComments,
    sequences: SequencePolicy::Requested { max: MAX_SEQUENCES },
    sampling: SamplingPolicy::Off,
    failure: FailurePolicy::Wrap {
        prefix: "Error generando reseña",
    },
    defaults: Defaults {
        max_length: 150,
        min_length: 40,
        temperature: 0.8,
        top_p: 0.95,
        repetition_penalty: 1.2,
    },
};

pub const GENERATE_POSITIVE: Endpoint = Endpoint {
    name: "generate-positive",
    kind: PromptKind::GeneratePositive,
    sequences: SequencePolicy::Single,
    sampling: SamplingPolicy::On,
    failure: FailurePolicy::Propagate,
    defaults: SENTIMENT_DEFAULTS,
};

pub const GENERATE_NEGATIVE: Endpoint = Endpoint {
    name: "generate-negative",
    kind: PromptKind::GenerateNegative,
    ..GENERATE_POSITIVE
};

pub const SUMMARY_STAGE: Endpoint = Endpoint {
    name: "summarize-and-generate/summary",
    kind: PromptKind::SummarizeStage,
    ..SUMMARIZE
};

pub const REVIEW_STAGE: Endpoint = Endpoint {
    name: "summarize-and-generate/review",
    kind: PromptKind::GenerateFromSummary,
    sequences: SequencePolicy::Single,
    sampling: SamplingPolicy::On,
    failure: FailurePolicy::Propagate,
    defaults: Defaults {
        max_length: 200,
        min_length: 50,
        temperature: 0.8,
        top_p: 0.95,
        repetition_penalty: 1.2,
    },
};

/// Output of one endpoint run. Always holds at least one text.
#[derive(Debug)]
pub struct Generation {
    first: String,
    rest: Vec<String>,
    pub model_used: String,
}

impl Generation {
    fn from_texts(
        texts: Vec<String>,
        expected: u32,
        model_used: String,
    ) -> Result<Self, GeneratorError> {
        if texts.len() < expected as usize {
            return Err(GeneratorError::InvalidResponse(format!(
                "expected {} sequences, got {}",
                expected,
                texts.len()
            )));
        }

        let mut texts = texts.into_iter().take(expected as usize);
        let Some(first) = texts.next() else {
            return Err(GeneratorError::InvalidResponse(
                "No sequences in response".to_string(),
            ));
        };

        Ok(Self {
            first,
            rest: texts.collect(),
            model_used,
        })
    }

    pub fn into_first(self) -> String {
        self.first
    }

    pub fn into_texts(self) -> Vec<String> {
        let mut texts = Vec::with_capacity(self.rest.len() + 1);
        texts.push(self.first);
        texts.extend(self.rest);
        texts
    }
}

impl Endpoint {
    pub fn sequence_count(&self, requested: Option<i64>) -> u32 {
        match self.sequences {
            SequencePolicy::Single => 1,
            SequencePolicy::Requested { max } => {
                requested.unwrap_or(1).clamp(1, i64::from(max)) as u32
            }
        }
    }

    pub fn config(&self, overrides: &Overrides) -> GenerationConfig {
        let max_length = overrides.max_length.unwrap_or(self.defaults.max_length);
        // a short caller max_length pulls the fixed minimum down with it
        let min_length = overrides
            .min_length
            .unwrap_or(self.defaults.min_length)
            .min(max_length);

        GenerationConfig {
            max_length,
            min_length,
            num_return_sequences: self.sequence_count(overrides.sequences),
            temperature: overrides.temperature.unwrap_or(self.defaults.temperature),
            do_sample: self.sampling == SamplingPolicy::On,
            top_p: self.defaults.top_p,
            repetition_penalty: self.defaults.repetition_penalty,
        }
    }

    pub async fn run(
        &self,
        generators: &Generators,
        language: Language,
        input: PromptInput<'_>,
        overrides: &Overrides,
    ) -> Result<Generation, ApiError> {
        let prompt = build_prompt(self.kind, language, input);
        let config = self.config(overrides);

        if let Some(requested) = overrides.sequences {
            if requested != i64::from(config.num_return_sequences) {
                tracing::warn!(
                    endpoint = self.name,
                    requested,
                    used = config.num_return_sequences,
                    "sequence count clamped"
                );
            }
        }

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "generation",
            %request_id,
            endpoint = self.name,
            language = language.as_str()
        );

        async move {
            let model_used = generators.select(language).model_name().to_string();
            let generation = generators
                .dispatch(language, &prompt, &config)
                .await
                .and_then(|texts| {
                    Generation::from_texts(texts, config.num_return_sequences, model_used.clone())
                });

            match generation {
                Ok(generation) => {
                    tracing::info!(
                        model = %model_used,
                        sequences = config.num_return_sequences,
                        "generation completed"
                    );
                    Ok(generation)
                }
                Err(e) => {
                    tracing::error!(model = %model_used, error = %e, "generation failed");
                    Err(self.failure.apply(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}
