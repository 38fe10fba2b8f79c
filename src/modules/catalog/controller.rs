use axum::Json;

use crate::modules::catalog::{crud::ReviewCrud, schema::ReviewListResponse};

pub async fn list_reviews() -> Json<ReviewListResponse> {
    tracing::debug!(count = ReviewCrud::count(), "listing placeholder reviews");

    Json(ReviewListResponse {
        reviews: ReviewCrud::find_all(),
    })
}
