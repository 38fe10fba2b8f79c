use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::services::dispatcher::Language;

fn default_max_length() -> u32 {
    150
}

fn default_min_length() -> u32 {
    40
}

fn default_num_reviews() -> i64 {
    1
}

fn default_temperature() -> f32 {
    0.8
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewsInput {
    #[validate(length(min = 1, message = "Reviews cannot be empty"))]
    pub reviews: Vec<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub summary: String,
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_length_bounds"))]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "Comments cannot be empty"))]
    pub comments: Vec<String>,
    pub language: Option<String>,
    #[serde(default = "default_max_length")]
    #[validate(range(min = 1, message = "max_length must be positive"))]
    pub max_length: u32,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    /// Clamped to 1..=5, never rejected.
    #[serde(default = "default_num_reviews")]
    pub num_reviews: i64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn validate_length_bounds(request: &GenerationRequest) -> Result<(), ValidationError> {
    if request.min_length > request.max_length {
        let mut error = ValidationError::new("length_bounds");
        error.message = Some("min_length cannot exceed max_length".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct GenerationResult {
    pub generated_reviews: Vec<String>,
    pub input_comments: Vec<String>,
    pub language: Language,
    pub model_used: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SentimentReviewRequest {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub product_name: String,
    /// Features for positive reviews, issues for negative ones. May be empty.
    pub key_features: Vec<String>,
    pub language: Option<String>,
    #[validate(range(min = 1, message = "max_length must be positive"))]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

#[derive(Debug, Serialize)]
pub struct SentimentReviewResult {
    pub product: String,
    pub review: String,
    pub sentiment: Sentiment,
    pub language: Language,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SummarizeAndGenerateRequest {
    #[validate(length(min = 1, message = "Reviews cannot be empty"))]
    pub reviews: Vec<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeAndGenerateResult {
    pub original_reviews: Vec<String>,
    pub summary: String,
    pub generated_review: String,
    pub language: Language,
}
