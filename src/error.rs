use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::services::generator::GeneratorError;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Request rejected before any generation ran.
    Validation(String),
    /// Generation fault re-signalled with its message attached.
    Service(String),
    /// Generation fault left to the default handler: logged, opaque 500.
    Unhandled(GeneratorError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse { message })).into_response()
            }
            ApiError::Service(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(DetailResponse { detail }))
                    .into_response()
            }
            ApiError::Unhandled(e) => {
                tracing::error!(error = %e, "unhandled generation failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
