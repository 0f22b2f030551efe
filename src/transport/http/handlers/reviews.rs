use crate::app::error::{Resource, ServiceError};
use crate::domain::model::NewReview;
use crate::transport::http::handlers::common::{json_body, path_id};
use crate::transport::http::types::{
    AppState, CreateReviewRequest, ErrorBody, ReviewView, ValidationErrorsBody,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (
            status = 200,
            description = "All reviews with customer and restaurant summaries",
            body = [ReviewView]
        )
    )
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewView>>, ServiceError> {
    let db_service = state.db_service.lock().await;
    let reviews = db_service.list_reviews().await?;
    Ok(Json(reviews.iter().map(ReviewView::from).collect()))
}

#[utoipa::path(
    get,
    path = "/reviews/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "The review", body = ReviewView),
        (status = 404, description = "Review not found", body = ErrorBody)
    )
)]
pub async fn get_review_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ReviewView>, ServiceError> {
    let id = path_id(path, Resource::Review)?;
    let db_service = state.db_service.lock().await;
    let review = db_service.get_review(id).await?;
    Ok(Json(ReviewView::from(&review)))
}

#[utoipa::path(
    post,
    path = "/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewView),
        (
            status = 400,
            description = "Validation failed or unknown customer/restaurant",
            body = ValidationErrorsBody
        )
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewView>), ServiceError> {
    let request = json_body(body)?;
    let new = NewReview::new(
        request.rating,
        request.comment.as_deref(),
        request.customer_id,
        request.restaurant_id,
    )?;

    let db_service = state.db_service.lock().await;
    let review = db_service.create_review(new).await?;
    Ok((StatusCode::CREATED, Json(ReviewView::from(&review))))
}

#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found", body = ErrorBody)
    )
)]
pub async fn delete_review_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServiceError> {
    let id = path_id(path, Resource::Review)?;
    let db_service = state.db_service.lock().await;
    db_service.delete_review(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
