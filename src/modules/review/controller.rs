use axum::{extract::State, Json};
use std::slice;
use validator::Validate;

use crate::error::ApiError;
use crate::modules::review::{
    endpoint::{
        Endpoint, Overrides, GENERATE, GENERATE_NEGATIVE, GENERATE_POSITIVE, REVIEW_STAGE,
        SUMMARIZE, SUMMARY_STAGE,
    },
    schema::{
        GenerationRequest, GenerationResult, ReviewsInput, Sentiment, SentimentReviewRequest,
        SentimentReviewResult, SummarizeAndGenerateRequest, SummarizeAndGenerateResult,
        SummaryResult,
    },
};
use crate::services::dispatcher::Language;
use crate::services::prompt::PromptInput;
use crate::AppState;

pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<ReviewsInput>,
) -> Result<Json<SummaryResult>, ApiError> {
    payload.validate()?;

    let language = Language::from_tag(payload.language.as_deref());
    let generation = SUMMARIZE
        .run(
            &state.generators,
            language,
            PromptInput::texts(&payload.reviews),
            &Overrides::default(),
        )
        .await?;

    Ok(Json(SummaryResult {
        summary: generation.into_first(),
    }))
}

pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, ApiError> {
    payload.validate()?;

    let language = Language::from_tag(payload.language.as_deref());
    let overrides = Overrides {
        max_length: Some(payload.max_length),
        min_length: Some(payload.min_length),
        temperature: Some(payload.temperature),
        sequences: Some(payload.num_reviews),
    };

    let generation = GENERATE
        .run(
            &state.generators,
            language,
            PromptInput::texts(&payload.comments),
            &overrides,
        )
        .await?;

    Ok(Json(GenerationResult {
        model_used: generation.model_used.clone(),
        generated_reviews: generation.into_texts(),
        input_comments: payload.comments,
        language,
    }))
}

async fn sentiment_review(
    state: AppState,
    endpoint: Endpoint,
    sentiment: Sentiment,
    payload: SentimentReviewRequest,
) -> Result<Json<SentimentReviewResult>, ApiError> {
    payload.validate()?;

    let language = Language::from_tag(payload.language.as_deref());
    let overrides = Overrides {
        max_length: payload.max_length,
        ..Overrides::default()
    };

    let generation = endpoint
        .run(
            &state.generators,
            language,
            PromptInput::product(&payload.product_name, &payload.key_features),
            &overrides,
        )
        .await?;

    Ok(Json(SentimentReviewResult {
        product: payload.product_name,
        review: generation.into_first(),
        sentiment,
        language,
    }))
}

pub async fn generate_positive(
    State(state): State<AppState>,
    Json(payload): Json<SentimentReviewRequest>,
) -> Result<Json<SentimentReviewResult>, ApiError> {
    sentiment_review(state, GENERATE_POSITIVE, Sentiment::Positive, payload).await
}

pub async fn generate_negative(
    State(state): State<AppState>,
    Json(payload): Json<SentimentReviewRequest>,
) -> Result<Json<SentimentReviewResult>, ApiError> {
    sentiment_review(state, GENERATE_NEGATIVE, Sentiment::Negative, payload).await
}

pub async fn summarize_and_generate(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeAndGenerateRequest>,
) -> Result<Json<SummarizeAndGenerateResult>, ApiError> {
    payload.validate()?;

    let language = Language::from_tag(payload.language.as_deref());
    let overrides = Overrides::default();

    let summary = SUMMARY_STAGE
        .run(
            &state.generators,
            language,
            PromptInput::texts(&payload.reviews),
            &overrides,
        )
        .await?
        .into_first();

    let generated_review = REVIEW_STAGE
        .run(
            &state.generators,
            language,
            PromptInput::texts(slice::from_ref(&summary)),
            &overrides,
        )
        .await?
        .into_first();

    Ok(Json(SummarizeAndGenerateResult {
        original_reviews: payload.reviews,
        summary,
        generated_review,
        language,
    }))
}
